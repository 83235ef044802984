//! Backend connection settings.

use serde::{Deserialize, Serialize};

/// Default backend location used by local deployments.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Connection settings for the intent management backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend (without the `/intents` suffix).
    pub base_url: String,
    /// Bearer token sent with listing requests, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `THEMIS_BACKEND_URL` (default: `http://localhost:4000`)
    /// - `THEMIS_TOKEN` (default: none)
    /// - `THEMIS_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("THEMIS_BACKEND_URL") {
            config.base_url = url;
        }

        if let Ok(token) = std::env::var("THEMIS_TOKEN") {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }

        if let Ok(timeout) = std::env::var("THEMIS_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.timeout_secs = secs;
            }
        }

        config
    }

    /// Builder: set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builder: set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
