use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_API_BASE_URL, DEFAULT_GATEWAY_BASE_URL};

/// Largest page Pinata's pinList accepts
pub const MAX_PAGE_LIMIT: u32 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_gateway_base_url")]
    pub gateway_base_url: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Keep the last good list (marked stale) when a refresh fails
    #[serde(default)]
    pub keep_list_on_refresh_error: bool,
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_gateway_base_url() -> String {
    DEFAULT_GATEWAY_BASE_URL.to_string()
}

fn default_page_limit() -> u32 {
    100
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            gateway_base_url: default_gateway_base_url(),
            page_limit: default_page_limit(),
            request_timeout_secs: default_request_timeout_secs(),
            keep_list_on_refresh_error: false,
            clipboard_command: None,
            vim_mode: false,
            store_path: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty file deserializes to null, treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml_str(&text)
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit.clamp(1, MAX_PAGE_LIMIT)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/pintui/config.yaml`
/// then `./config.yaml` are tried, and `None` means "run on defaults".
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("pintui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
