//! Fail-soft adapter over the dynamic intent source.
//!
//! A slow or broken backend must never break a reply: every failure mode
//! (transport, status, payload, timeout) collapses into an empty list so the
//! engine falls back to the static catalog.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ThemisError;
use crate::intent::{Intent, MISSING_RESPONSE_PLACEHOLDER};
use crate::traits::IntentSource;

/// Wraps an [`IntentSource`] with a bounded fetch and empty-on-failure policy.
pub struct DynamicIntents<S: IntentSource> {
    source: Arc<S>,
    timeout: Duration,
}

impl<S: IntentSource> DynamicIntents<S> {
    /// Create a new adapter with the given fetch timeout.
    pub fn new(source: Arc<S>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Fetch dynamic intents, or an empty list if anything goes wrong.
    ///
    /// Intents that arrive without responses get the placeholder response.
    pub async fn fetch(&self) -> Vec<Intent> {
        match tokio::time::timeout(self.timeout, self.source.fetch_intents()).await {
            Ok(Ok(intents)) => {
                debug!(count = intents.len(), "Fetched dynamic intents");
                intents
                    .into_iter()
                    .map(|intent| intent.ensure_responses(MISSING_RESPONSE_PLACEHOLDER))
                    .collect()
            }
            Ok(Err(e)) => {
                warn!(
                    error = %e,
                    code = e.code().as_str(),
                    "Dynamic intents unavailable, using static catalog only"
                );
                Vec::new()
            }
            Err(_) => {
                let e = ThemisError::Timeout {
                    after_ms: self.timeout.as_millis() as u64,
                };
                warn!(error = %e, "Dynamic intents unavailable, using static catalog only");
                Vec::new()
            }
        }
    }

    /// The configured fetch timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<S: IntentSource> Clone for DynamicIntents<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockIntentSource;
    use async_trait::async_trait;

    #[tokio::test]
    async fn test_passes_through_intents() {
        let mut source = MockIntentSource::new();
        source
            .expect_fetch_intents()
            .times(1)
            .returning(|| {
                Ok(vec![
                    Intent::new("Becas", ["becas"], ["Ver bienestar."]).with_id("1")
                ])
            });

        let dynamic = DynamicIntents::new(Arc::new(source), Duration::from_secs(1));
        let intents = dynamic.fetch().await;
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_error_degrades_to_empty() {
        let mut source = MockIntentSource::new();
        source
            .expect_fetch_intents()
            .returning(|| Err(ThemisError::network("connection refused")));

        let dynamic = DynamicIntents::new(Arc::new(source), Duration::from_secs(1));
        assert!(dynamic.fetch().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_responses_get_placeholder() {
        let mut source = MockIntentSource::new();
        source.expect_fetch_intents().returning(|| {
            let mut intent = Intent::new("Vacio", ["vacio"], ["x"]).with_id("9");
            intent.responses.clear();
            Ok(vec![intent])
        });

        let dynamic = DynamicIntents::new(Arc::new(source), Duration::from_secs(1));
        let intents = dynamic.fetch().await;
        assert_eq!(intents[0].responses, vec![MISSING_RESPONSE_PLACEHOLDER]);
    }

    struct SlowSource;

    #[async_trait]
    impl IntentSource for SlowSource {
        async fn fetch_intents(&self) -> crate::error::ThemisResult<Vec<Intent>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![Intent::new("Tarde", ["tarde"], ["Tarde"]).with_id("1")])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades_to_empty() {
        let dynamic = DynamicIntents::new(Arc::new(SlowSource), Duration::from_millis(50));
        assert!(dynamic.fetch().await.is_empty());
    }
}
