use async_trait::async_trait;
use reqwest::{multipart, Body, Client, RequestBuilder, Response};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::io::ReaderStream;

use crate::credentials::Credential;
use crate::model::StagedFile;

pub const PROVIDER_NAME: &str = "Pinata";
pub const DEFAULT_API_BASE_URL: &str = "https://api.pinata.cloud";
pub const DEFAULT_GATEWAY_BASE_URL: &str = "https://gateway.pinata.cloud";

const API_KEY_HEADER: &str = "pinata_api_key";
const API_SECRET_HEADER: &str = "pinata_secret_api_key";

/// Metadata key used to carry the uploaded file's media type
pub const MEDIA_TYPE_KEY: &str = "type";

#[derive(Debug, thiserror::Error)]
pub enum PinataError {
    /// Non-success HTTP status; `body` is the raw response text
    #[error("Pinata API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse Pinata response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Helper function to deserialize null as the type's default
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PinMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub keyvalues: HashMap<String, serde_json::Value>,
}

impl PinMetadata {
    /// Media type tag stored alongside the pin, if it is a non-empty string
    pub fn media_type(&self) -> Option<&str> {
        self.keyvalues
            .get(MEDIA_TYPE_KEY)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// One row of `/data/pinList`
#[derive(Debug, Clone, Deserialize)]
pub struct PinnedItem {
    pub ipfs_pin_hash: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub date_pinned: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub metadata: PinMetadata,
}

#[derive(Debug, Deserialize)]
struct PinListResponse {
    #[serde(default)]
    #[allow(dead_code)]
    count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    rows: Vec<PinnedItem>,
}

/// Response of `/pinning/pinFileToIPFS`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PinResponse {
    #[serde(rename = "IpfsHash")]
    pub ipfs_hash: String,
    #[serde(rename = "PinSize", default)]
    pub pin_size: u64,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    message: String,
}

/// The three pinning calls the registry depends on, plus a credential probe.
///
/// Credentials are passed per call so a save takes effect on the next request
/// without rebuilding the client.
#[async_trait]
pub trait PinningService: Send + Sync {
    async fn list_pins(&self, credential: &Credential) -> Result<Vec<PinnedItem>, PinataError>;

    async fn pin_file(
        &self,
        credential: &Credential,
        file: &StagedFile,
    ) -> Result<PinResponse, PinataError>;

    async fn unpin(&self, credential: &Credential, hash: &str) -> Result<(), PinataError>;

    async fn test_authentication(&self, credential: &Credential) -> Result<String, PinataError>;
}

#[derive(Clone)]
pub struct PinataClient {
    base_url: String,
    page_limit: u32,
    client: Client,
}

impl PinataClient {
    pub fn new(base_url: String, page_limit: u32, timeout: Duration) -> Result<Self, PinataError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_limit,
            client,
        })
    }

    fn authorized(&self, builder: RequestBuilder, credential: &Credential) -> RequestBuilder {
        builder
            .header(API_KEY_HEADER, &credential.api_key)
            .header(API_SECRET_HEADER, &credential.api_secret)
    }

    /// Turn a non-success status into `PinataError::Status` carrying the body text
    async fn check_status(response: Response) -> Result<Response, PinataError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(status = status.as_u16(), %body, "Pinata request failed");
        Err(PinataError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PinningService for PinataClient {
    async fn list_pins(&self, credential: &Credential) -> Result<Vec<PinnedItem>, PinataError> {
        let url = format!(
            "{}/data/pinList?status=pinned&pageLimit={}",
            self.base_url, self.page_limit
        );
        let response = self
            .authorized(self.client.get(&url), credential)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        let list: PinListResponse = serde_json::from_str(&text)?;
        tracing::debug!(rows = list.rows.len(), "pinList returned");

        Ok(list.rows)
    }

    async fn pin_file(
        &self,
        credential: &Credential,
        file: &StagedFile,
    ) -> Result<PinResponse, PinataError> {
        let io_error = |source| PinataError::Io {
            path: file.path.display().to_string(),
            source,
        };
        let handle = tokio::fs::File::open(&file.path).await.map_err(io_error)?;
        let length = handle.metadata().await.map_err(io_error)?.len();

        let mut keyvalues = HashMap::new();
        keyvalues.insert(
            MEDIA_TYPE_KEY.to_string(),
            serde_json::Value::String(file.media_type.clone()),
        );
        let metadata = PinMetadata {
            name: Some(file.name.clone()),
            keyvalues,
        };

        // Streamed from disk, never buffered whole
        let body = Body::wrap_stream(ReaderStream::new(handle));
        let part = multipart::Part::stream_with_length(body, length)
            .file_name(file.name.clone())
            .mime_str(&file.media_type)?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("pinataMetadata", serde_json::to_string(&metadata)?);

        let url = format!("{}/pinning/pinFileToIPFS", self.base_url);
        tracing::info!(name = %file.name, size = length, "Pinning file");
        let response = self
            .authorized(self.client.post(&url), credential)
            .multipart(form)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        let pinned: PinResponse = serde_json::from_str(&text)?;

        Ok(pinned)
    }

    async fn unpin(&self, credential: &Credential, hash: &str) -> Result<(), PinataError> {
        let url = format!("{}/pinning/unpin/{}", self.base_url, hash);
        tracing::info!(%hash, "Unpinning");
        let response = self
            .authorized(self.client.delete(&url), credential)
            .send()
            .await?;
        Self::check_status(response).await?;

        Ok(())
    }

    async fn test_authentication(&self, credential: &Credential) -> Result<String, PinataError> {
        let url = format!("{}/data/testAuthentication", self.base_url);
        let response = self
            .authorized(self.client.get(&url), credential)
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        let auth: AuthResponse = serde_json::from_str(&text)?;

        Ok(auth.message)
    }
}
