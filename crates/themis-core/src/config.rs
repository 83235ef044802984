//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::composer::FALLBACK_REPLY;
use crate::error::{ThemisError, ThemisResult};

/// Configuration for [`crate::FaqEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the dynamic intent fetch, in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Whether matched dynamic intents are reported to the backend.
    pub report_usage: bool,
    /// How many intents the frequently-asked list holds.
    pub faq_limit: usize,
    /// Reply used when nothing matches.
    pub fallback_reply: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_ms: 3_000,
            report_usage: true,
            faq_limit: 5,
            fallback_reply: FALLBACK_REPLY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ThemisResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| ThemisError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ThemisError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| ThemisError::Configuration(e.to_string())),
            _ => Err(ThemisError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `THEMIS_FETCH_TIMEOUT_MS` (default: 3000)
    /// - `THEMIS_DISABLE_USAGE_REPORTS` (default: unset = reporting on)
    /// - `THEMIS_FAQ_LIMIT` (default: 5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(timeout) = std::env::var("THEMIS_FETCH_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                config.fetch_timeout_ms = ms;
            }
        }

        if std::env::var("THEMIS_DISABLE_USAGE_REPORTS").is_ok() {
            config.report_usage = false;
        }

        if let Ok(limit) = std::env::var("THEMIS_FAQ_LIMIT") {
            if let Ok(limit) = limit.parse() {
                config.faq_limit = limit;
            }
        }

        config
    }

    /// Set the dynamic fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Disable usage reporting.
    pub fn without_usage_reports(mut self) -> Self {
        self.report_usage = false;
        self
    }

    /// Set the frequently-asked list size.
    pub fn with_faq_limit(mut self, limit: usize) -> Self {
        self.faq_limit = limit;
        self
    }

    /// Set the no-match reply.
    pub fn with_fallback_reply(mut self, reply: impl Into<String>) -> Self {
        self.fallback_reply = reply.into();
        self
    }

    /// The dynamic fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
        assert!(config.report_usage);
        assert_eq!(config.faq_limit, 5);
        assert_eq!(config.fallback_reply, FALLBACK_REPLY);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"faq_limit": 10}}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.faq_limit, 10);
        assert_eq!(config.fetch_timeout_ms, 3_000);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_fetch_timeout(Duration::from_millis(250))
            .without_usage_reports()
            .with_fallback_reply("¿Perdón?");
        assert_eq!(config.fetch_timeout_ms, 250);
        assert!(!config.report_usage);
        assert_eq!(config.fallback_reply, "¿Perdón?");
    }
}
