use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_AUTH_URL, DEFAULT_HTTP_TIMEOUT_MS, DEFAULT_MIN_URI_LEN, DEFAULT_REFRESH_WINDOW_SECS,
    DEFAULT_SCOPE,
};

/// ================================
/// Full client configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub app_id: String,
    pub secret: String,
}

/// ================================
/// Client-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    /// bounds both authentication and delivery requests
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// re-authenticate once now is later than `expires_at - refresh_window_seconds`
    #[serde(default = "default_refresh_window_seconds")]
    pub refresh_window_seconds: u64,
    /// channel uris shorter than this are rejected before any request
    #[serde(default = "default_min_uri_len")]
    pub min_uri_len: usize,
    pub logging: Option<LoggingConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            scope: default_scope(),
            timeout_ms: default_timeout_ms(),
            refresh_window_seconds: default_refresh_window_seconds(),
            min_uri_len: default_min_uri_len(),
            logging: None,
        }
    }
}

/// Log level and output format, under `settings.logging`.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

pub const DEFAULT_LOG_LEVEL: &str = "info";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_owned()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_owned()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_refresh_window_seconds() -> u64 {
    DEFAULT_REFRESH_WINDOW_SECS
}

fn default_min_uri_len() -> usize {
    DEFAULT_MIN_URI_LEN
}
