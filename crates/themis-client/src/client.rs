//! HTTP client for the intent management backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use themis_core::{Intent, IntentSource, ThemisError, ThemisResult, UsageSink};

use crate::config::BackendConfig;
use crate::records::{parse_listing, UsageResponse};

/// Client for the intent management backend.
///
/// Serves as both the dynamic [`IntentSource`] and the [`UsageSink`] of a
/// [`themis_core::FaqEngine`].
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl BackendClient {
    /// Create a client from connection settings.
    pub fn new(config: BackendConfig) -> ThemisResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ThemisError::Configuration(format!("Invalid backend URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ThemisError::Configuration(format!(
                "Backend URL '{}' cannot be used as a base",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ThemisError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            token: config.token,
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> ThemisResult<Self> {
        Self::new(BackendConfig::from_env())
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// List all intents (`GET /intents`).
    pub async fn list_intents(&self) -> ThemisResult<Vec<Intent>> {
        let mut request = self.client.get(self.endpoint(&["intents"]));
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ThemisError::network_with_source("Failed to list intents", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ThemisError::network_with_source("Failed to read intents response", e))?;

        if !status.is_success() {
            return Err(ThemisError::from_http_status(status.as_u16(), &body));
        }

        let intents = parse_listing(&body)?;
        debug!(count = intents.len(), "Listed intents");
        Ok(intents)
    }

    /// Increment the usage counter of an intent (`POST /intents/{id}/use`).
    ///
    /// Returns the new count when the backend includes it.
    pub async fn increment_usage(&self, intent_id: &str) -> ThemisResult<Option<u64>> {
        let response = self
            .client
            .post(self.endpoint(&["intents", intent_id, "use"]))
            .send()
            .await
            .map_err(|e| ThemisError::network_with_source("Failed to record intent usage", e))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(ThemisError::from_http_status(status.as_u16(), &error));
        }

        let count = response
            .json::<UsageResponse>()
            .await
            .ok()
            .and_then(|body| body.new_count);
        Ok(count)
    }

    /// Resolve an attachment reference against the backend base URL.
    ///
    /// Absolute URLs are returned unchanged; server-relative paths such as
    /// `/docs/<name>` become downloadable links.
    pub fn file_url(&self, file: &str) -> ThemisResult<Url> {
        self.base_url
            .join(file)
            .map_err(|e| ThemisError::parse(format!("Invalid file reference '{}': {}", file, e)))
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl IntentSource for BackendClient {
    async fn fetch_intents(&self) -> ThemisResult<Vec<Intent>> {
        self.list_intents().await
    }
}

#[async_trait]
impl UsageSink for BackendClient {
    async fn record_use(&self, intent_id: &str) -> ThemisResult<Option<u64>> {
        self.increment_usage(intent_id).await
    }
}
