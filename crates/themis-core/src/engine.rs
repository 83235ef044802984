//! The reply pipeline: normalize, resolve, report, compose.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::catalog::IntentCatalog;
use crate::composer::ResponseComposer;
use crate::config::EngineConfig;
use crate::dynamic::DynamicIntents;
use crate::intent::{Intent, MatchResult};
use crate::resolver::{IntentMatch, IntentResolver};
use crate::traits::{IntentSource, NoopSink, NoopSource, UsageSink};
use crate::usage::UsageReporter;

/// FAQ chatbot engine.
///
/// Holds no mutable state: dynamic intents are fetched fresh for every
/// message, so one engine can serve concurrent sessions behind an `Arc`.
pub struct FaqEngine<S: IntentSource, U: UsageSink> {
    resolver: IntentResolver,
    dynamic: DynamicIntents<S>,
    reporter: UsageReporter<U>,
    composer: ResponseComposer,
    config: EngineConfig,
}

impl FaqEngine<NoopSource, NoopSink> {
    /// An engine that only knows the static catalog.
    pub fn static_only(catalog: Arc<IntentCatalog>, config: EngineConfig) -> Self {
        Self::new(catalog, Arc::new(NoopSource), Arc::new(NoopSink), config)
    }
}

impl<S: IntentSource, U: UsageSink + 'static> FaqEngine<S, U> {
    /// Create a new engine.
    pub fn new(
        catalog: Arc<IntentCatalog>,
        source: Arc<S>,
        sink: Arc<U>,
        config: EngineConfig,
    ) -> Self {
        let reporter = UsageReporter::new(sink);
        let reporter = if config.report_usage {
            reporter
        } else {
            reporter.disabled()
        };

        Self {
            resolver: IntentResolver::new(catalog),
            dynamic: DynamicIntents::new(source, config.fetch_timeout()),
            reporter,
            composer: ResponseComposer::new(config.fallback_reply.clone()),
            config,
        }
    }

    /// Resolve a message against static and freshly fetched dynamic intents.
    ///
    /// Does not report usage.
    pub async fn resolve(&self, message: &str) -> Option<IntentMatch> {
        let dynamic = self.dynamic.fetch().await;
        self.resolver.resolve(message, &dynamic)
    }

    /// Answer a user message. Never fails.
    ///
    /// A matched dynamic intent triggers a background usage report that this
    /// call does not wait for.
    #[instrument(skip(self, message), fields(len = message.len()))]
    pub async fn respond(&self, message: &str) -> MatchResult {
        let matched = self.resolve(message).await;

        if let Some(m) = &matched {
            self.reporter.report_usage(m.intent.id.as_deref());
        }

        self.composer.compose(matched.as_ref())
    }

    /// Dynamic intents ranked by usage count, highest first.
    ///
    /// Ties keep backend order. Empty when the backend is unavailable.
    pub async fn frequently_asked(&self) -> Vec<Intent> {
        let mut intents = self.dynamic.fetch().await;
        intents.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        intents.truncate(self.config.faq_limit);
        debug!(count = intents.len(), "Ranked frequently asked intents");
        intents
    }

    /// The static catalog.
    pub fn catalog(&self) -> &IntentCatalog {
        self.resolver.catalog()
    }

    /// Engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::FALLBACK_REPLY;
    use crate::error::ThemisError;
    use crate::traits::{MockIntentSource, MockUsageSink};

    fn engine(
        source: MockIntentSource,
        sink: MockUsageSink,
    ) -> FaqEngine<MockIntentSource, MockUsageSink> {
        FaqEngine::new(
            Arc::new(IntentCatalog::builtin()),
            Arc::new(source),
            Arc::new(sink),
            EngineConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_static_match_skips_usage_report() {
        let mut source = MockIntentSource::new();
        source.expect_fetch_intents().times(1).returning(|| Ok(Vec::new()));
        let mut sink = MockUsageSink::new();
        sink.expect_record_use().never();

        let reply = engine(source, sink).respond("Hola, buenos dias!").await;
        assert_eq!(
            reply.text,
            IntentCatalog::builtin().get("Saludo").unwrap().responses[0]
        );
        assert!(reply.file.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_still_answers() {
        let mut source = MockIntentSource::new();
        source
            .expect_fetch_intents()
            .returning(|| Err(ThemisError::parse("expected array")));
        let mut sink = MockUsageSink::new();
        sink.expect_record_use().never();

        let engine = engine(source, sink);
        assert!(engine.respond("gracias").await.text.starts_with("¡De nada!"));
        assert_eq!(engine.respond("zzxxqq nonsense").await.text, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_frequently_asked_ordering() {
        let mut source = MockIntentSource::new();
        source.expect_fetch_intents().returning(|| {
            Ok(vec![
                Intent::new("A", ["a"], ["a"]).with_id("1").with_usage_count(2),
                Intent::new("B", ["b"], ["b"]).with_id("2").with_usage_count(9),
                Intent::new("C", ["c"], ["c"]).with_id("3"),
                Intent::new("D", ["d"], ["d"]).with_id("4").with_usage_count(2),
            ])
        });

        let engine = FaqEngine::new(
            Arc::new(IntentCatalog::empty()),
            Arc::new(source),
            Arc::new(MockUsageSink::new()),
            EngineConfig::default().with_faq_limit(3),
        );

        let tags: Vec<_> = engine
            .frequently_asked()
            .await
            .into_iter()
            .map(|i| i.tag)
            .collect();
        assert_eq!(tags, vec!["B", "A", "D"]);
    }

    #[tokio::test]
    async fn test_static_only_engine() {
        let engine =
            FaqEngine::static_only(Arc::new(IntentCatalog::builtin()), EngineConfig::default());
        assert_eq!(engine.catalog().len(), 16);
        assert!(engine.frequently_asked().await.is_empty());
        assert!(engine.resolve("adiós").await.is_some());
    }
}
