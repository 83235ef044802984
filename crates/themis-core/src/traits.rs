//! Seams to the intent management backend.

use async_trait::async_trait;

use crate::error::ThemisResult;
use crate::intent::Intent;

/// A fallible source of dynamic intents.
///
/// Implementations report failures honestly; the engine decides how to
/// degrade (see [`crate::dynamic::DynamicIntents`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntentSource: Send + Sync {
    /// Fetch the current intent list, already mapped into [`Intent`]s.
    async fn fetch_intents(&self) -> ThemisResult<Vec<Intent>>;
}

/// Destination for usage increments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageSink: Send + Sync {
    /// Record one use of the intent with the given backend id.
    ///
    /// Returns the new counter value when the backend reports it.
    async fn record_use(&self, intent_id: &str) -> ThemisResult<Option<u64>>;
}

/// Source with no intents, for static-only deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSource;

#[async_trait]
impl IntentSource for NoopSource {
    async fn fetch_intents(&self) -> ThemisResult<Vec<Intent>> {
        Ok(Vec::new())
    }
}

/// Sink that discards usage reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

#[async_trait]
impl UsageSink for NoopSink {
    async fn record_use(&self, _intent_id: &str) -> ThemisResult<Option<u64>> {
        Ok(None)
    }
}
