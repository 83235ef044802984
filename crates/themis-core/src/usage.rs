//! Fire-and-forget usage telemetry.
//!
//! Each report runs as a detached task. The reply path never awaits it and
//! its outcome is only observed through logs.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::traits::UsageSink;

/// Dispatches usage increments for dynamic intents in the background.
pub struct UsageReporter<U: UsageSink> {
    sink: Arc<U>,
    enabled: bool,
}

impl<U: UsageSink + 'static> UsageReporter<U> {
    /// Create a new reporter.
    pub fn new(sink: Arc<U>) -> Self {
        Self {
            sink,
            enabled: true,
        }
    }

    /// Builder: turn reporting off entirely.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether reports are dispatched.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Report one use of `intent_id`.
    ///
    /// No-op for `None` (static intent or no match). Returns the handle of the
    /// spawned task; callers are free to drop it.
    pub fn report_usage(&self, intent_id: Option<&str>) -> Option<JoinHandle<()>> {
        let id = intent_id?.to_string();
        if !self.enabled {
            return None;
        }

        let Ok(handle) = Handle::try_current() else {
            warn!(intent_id = %id, "No async runtime available, usage report dropped");
            return None;
        };

        let sink = self.sink.clone();
        Some(handle.spawn(async move {
            match sink.record_use(&id).await {
                Ok(count) => debug!(intent_id = %id, ?count, "Recorded intent usage"),
                Err(e) => error!(intent_id = %id, error = %e, "Failed to record intent usage"),
            }
        }))
    }
}

impl<U: UsageSink> Clone for UsageReporter<U> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            enabled: self.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemisError;
    use crate::traits::MockUsageSink;

    #[tokio::test]
    async fn test_reports_dynamic_id_once() {
        let mut sink = MockUsageSink::new();
        sink.expect_record_use()
            .withf(|id| id == "42")
            .times(1)
            .returning(|_| Ok(Some(3)));

        let reporter = UsageReporter::new(Arc::new(sink));
        reporter.report_usage(Some("42")).unwrap().await.unwrap();
    }

    #[tokio::test]
    async fn test_static_intent_is_noop() {
        let mut sink = MockUsageSink::new();
        sink.expect_record_use().never();

        let reporter = UsageReporter::new(Arc::new(sink));
        assert!(reporter.report_usage(None).is_none());
    }

    #[tokio::test]
    async fn test_failure_is_swallowed() {
        let mut sink = MockUsageSink::new();
        sink.expect_record_use()
            .times(1)
            .returning(|_| Err(ThemisError::from_http_status(404, "Intención no encontrada")));

        let reporter = UsageReporter::new(Arc::new(sink));
        let handle = reporter.report_usage(Some("404")).unwrap();
        assert!(handle.await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_reporter() {
        let mut sink = MockUsageSink::new();
        sink.expect_record_use().never();

        let reporter = UsageReporter::new(Arc::new(sink)).disabled();
        assert!(!reporter.is_enabled());
        assert!(reporter.report_usage(Some("1")).is_none());
    }

    #[test]
    fn test_without_runtime_does_not_panic() {
        let mut sink = MockUsageSink::new();
        sink.expect_record_use().never();

        let reporter = UsageReporter::new(Arc::new(sink));
        assert!(reporter.report_usage(Some("1")).is_none());
    }
}
