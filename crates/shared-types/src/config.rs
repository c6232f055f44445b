use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Origin used when neither `config.toml` nor `API_BASE_URL` provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Upstream request timeout used when `config.toml` omits one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Name of the session cookie the API sets on token issuance.
pub const DEFAULT_SESSION_COOKIE: &str = "access_token";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_session_cookie() -> String {
    DEFAULT_SESSION_COOKIE.to_string()
}

/// Location of the external Competition Portal API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session_cookie: default_session_cookie(),
        }
    }
}

impl ApiConfig {
    /// Join an absolute API path (e.g. `/api/users/`) onto the configured origin.
    ///
    /// Exactly one slash separates the two regardless of how either side is written.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl PortalConfig {
    /// Replace the API origin with `base_url` when it is set and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.map(|u| u.trim().to_string()) {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }
}
