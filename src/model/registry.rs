//! File Registry Model
//!
//! Holds the pinned-file list and the busy state of the three remote
//! operations, and implements their state machine. Operations never do I/O:
//! they mutate the model and return [`Effect`]s that the runtime carries out
//! (send a request, show a notification). Responses come back through
//! [`RegistryModel::apply`].
//!
//! Reconciliation is full-refresh-after-every-mutation. Each operation class
//! (list, upload, delete) is single-flight.

use chrono::{DateTime, Utc};

use super::types::{FileRecord, Notification, StagedFile};
use crate::credentials::Credential;
use crate::logic;
use crate::services::api::{ApiRequest, ApiResponse};

/// Progress marker shown while the pin request is in flight
pub const UPLOAD_MIDPOINT: u8 = 50;

/// Something the runtime must do on the model's behalf
#[derive(Debug)]
pub enum Effect {
    Request(ApiRequest),
    Notify(Notification),
}

#[derive(Clone, Debug)]
pub struct RegistryModel {
    /// Current list, remote order
    pub files: Vec<FileRecord>,

    /// Staged file for the next upload
    pub selected_file: Option<StagedFile>,

    pub uploading: bool,

    /// 0 idle, 50 while pinning, 100 briefly on success
    pub upload_progress: u8,

    /// Record id being unpinned
    pub deleting: Option<String>,

    /// Generation of the list request whose response will be accepted
    list_in_flight: Option<u64>,

    /// Last generation handed out
    list_generation: u64,

    /// A refresh was requested while one was in flight
    refresh_queued: bool,

    /// The list is the last good one after a failed refresh
    pub stale: bool,

    pub last_refreshed: Option<DateTime<Utc>>,

    /// Message of the last failed refresh, cleared by a good one
    pub last_error: Option<String>,

    /// Keep the last good list instead of clearing it on refresh failure
    pub keep_list_on_error: bool,

    pub gateway_base_url: String,
}

impl RegistryModel {
    pub fn new(gateway_base_url: impl Into<String>, keep_list_on_error: bool) -> Self {
        Self {
            files: Vec::new(),
            selected_file: None,
            uploading: false,
            upload_progress: 0,
            deleting: None,
            list_in_flight: None,
            list_generation: 0,
            refresh_queued: false,
            stale: false,
            last_refreshed: None,
            last_error: None,
            keep_list_on_error,
            gateway_base_url: gateway_base_url.into(),
        }
    }

    pub fn listing(&self) -> bool {
        self.list_in_flight.is_some()
    }

    pub fn refresh_queued(&self) -> bool {
        self.refresh_queued
    }

    pub fn get(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Replace the staged file. Any file of any size is accepted.
    pub fn select_file(&mut self, file: StagedFile) {
        tracing::debug!(name = %file.name, size = file.size, "Staged file");
        self.selected_file = Some(file);
    }

    pub fn clear_selection(&mut self) {
        self.selected_file = None;
    }

    /// Re-fetch the remote listing.
    ///
    /// Without a usable credential the list is cleared and nothing is sent.
    /// While a list request is in flight the call is queued and re-issued once
    /// that request completes.
    pub fn refresh(&mut self, credential: &Credential) -> Vec<Effect> {
        if !credential.is_usable() {
            // Abandon any in-flight listing so its response is dropped
            self.files.clear();
            self.list_in_flight = None;
            self.refresh_queued = false;
            self.stale = false;
            self.last_error = None;
            return Vec::new();
        }

        if self.list_in_flight.is_some() {
            tracing::debug!("Refresh already in flight, queued");
            self.refresh_queued = true;
            return Vec::new();
        }

        self.list_generation += 1;
        self.list_in_flight = Some(self.list_generation);

        vec![Effect::Request(ApiRequest::ListPins {
            credential: credential.clone(),
            generation: self.list_generation,
        })]
    }

    /// Pin the staged file
    pub fn upload(&mut self, credential: &Credential) -> Vec<Effect> {
        let Some(file) = self.selected_file.clone() else {
            return vec![Effect::Notify(Notification::warning(
                "No file selected",
                "Please select a file first!",
            ))];
        };

        if !credential.is_usable() {
            return vec![Effect::Notify(missing_credentials())];
        }

        if self.uploading {
            return vec![Effect::Notify(Notification::warning(
                "Upload in progress",
                "Wait for the current upload to finish.",
            ))];
        }

        self.uploading = true;
        // No byte-level progress from the pin call, show the fixed midpoint
        self.upload_progress = UPLOAD_MIDPOINT;

        vec![Effect::Request(ApiRequest::PinFile {
            credential: credential.clone(),
            file,
        })]
    }

    /// Unpin the record `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str, credential: &Credential) -> Vec<Effect> {
        let Some(record) = self.get(id) else {
            tracing::debug!(%id, "Delete of unknown record ignored");
            return Vec::new();
        };
        let hash = record.remote.hash.clone();

        if !credential.is_usable() {
            return vec![Effect::Notify(missing_credentials())];
        }

        if self.deleting.is_some() {
            return vec![Effect::Notify(Notification::warning(
                "Delete in progress",
                "Wait for the current delete to finish.",
            ))];
        }

        self.deleting = Some(id.to_string());

        vec![Effect::Request(ApiRequest::Unpin {
            credential: credential.clone(),
            id: id.to_string(),
            hash,
        })]
    }

    /// Probe the credential against Pinata
    pub fn verify(&self, credential: &Credential) -> Vec<Effect> {
        if !credential.is_usable() {
            return vec![Effect::Notify(missing_credentials())];
        }
        vec![Effect::Request(ApiRequest::VerifyCredentials {
            credential: credential.clone(),
        })]
    }

    /// Fold a response into the model. `credential` is the one current now,
    /// used for any follow-up refresh.
    pub fn apply(&mut self, response: ApiResponse, credential: &Credential) -> Vec<Effect> {
        self.apply_at(response, credential, Utc::now())
    }

    pub fn apply_at(
        &mut self,
        response: ApiResponse,
        credential: &Credential,
        now: DateTime<Utc>,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();

        match response {
            ApiResponse::ListResult { generation, items } => {
                if self.list_in_flight != Some(generation) {
                    tracing::debug!(generation, "Dropping superseded list response");
                    return effects;
                }
                self.list_in_flight = None;

                match items {
                    Ok(items) => {
                        self.files =
                            logic::records::map_pinned_items(&items, &self.gateway_base_url, now);
                        self.stale = false;
                        self.last_refreshed = Some(now);
                        self.last_error = None;
                        tracing::info!(count = self.files.len(), "File list refreshed");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to list pinned files");
                        let error_type = logic::errors::classify_error(&e);
                        let message = logic::errors::format_error_message(&e);
                        effects.push(Effect::Notify(Notification::error(
                            error_type.title(),
                            format!("Failed to load files: {}", message),
                        )));
                        self.last_error = Some(message);

                        if self.keep_list_on_error && !self.files.is_empty() {
                            self.stale = true;
                        } else {
                            self.files.clear();
                            self.stale = false;
                        }
                    }
                }

                if self.refresh_queued {
                    self.refresh_queued = false;
                    effects.extend(self.refresh(credential));
                }
            }

            ApiResponse::PinResult { file, result } => {
                match result {
                    Ok(pinned) => {
                        self.upload_progress = 100;
                        self.selected_file = None;
                        tracing::info!(name = %file.name, hash = %pinned.ipfs_hash, "Upload pinned");
                        effects.push(Effect::Notify(Notification::success(
                            "Upload complete",
                            format!("{} uploaded successfully to Pinata!", file.name),
                        )));
                        effects.extend(self.refresh(credential));
                    }
                    Err(e) => {
                        tracing::error!(name = %file.name, error = %e, "Upload failed");
                        let error_type = logic::errors::classify_error(&e);
                        effects.push(Effect::Notify(Notification::error(
                            error_type.title(),
                            format!(
                                "Upload failed: {}",
                                logic::errors::format_error_message(&e)
                            ),
                        )));
                    }
                }

                self.uploading = false;
                self.upload_progress = 0;
            }

            ApiResponse::UnpinResult { id, result } => {
                match result {
                    Ok(()) => {
                        let name = self
                            .get(&id)
                            .map(|f| f.name.clone())
                            .unwrap_or_else(|| id.clone());
                        self.files.retain(|f| f.id != id);
                        tracing::info!(%id, "Unpinned");
                        effects.push(Effect::Notify(Notification::success(
                            "File deleted",
                            format!("{} was unpinned from Pinata.", name),
                        )));
                        effects.extend(self.refresh(credential));
                    }
                    Err(e) => {
                        tracing::error!(%id, error = %e, "Delete failed");
                        let error_type = logic::errors::classify_error(&e);
                        effects.push(Effect::Notify(Notification::error(
                            error_type.title(),
                            format!(
                                "Delete failed: {}",
                                logic::errors::format_error_message(&e)
                            ),
                        )));
                    }
                }

                self.deleting = None;
            }

            ApiResponse::VerifyResult { result } => match result {
                Ok(message) => {
                    effects.push(Effect::Notify(Notification::success(
                        "Credentials verified",
                        if message.is_empty() {
                            "Pinata accepted the API key.".to_string()
                        } else {
                            message
                        },
                    )));
                }
                Err(e) => {
                    let error_type = logic::errors::classify_error(&e);
                    effects.push(Effect::Notify(Notification::error(
                        error_type.title(),
                        logic::errors::format_error_message(&e),
                    )));
                }
            },
        }

        effects
    }
}

fn missing_credentials() -> Notification {
    Notification::warning(
        "Missing credentials",
        "Please provide both Pinata API Key and Secret Key!",
    )
}
