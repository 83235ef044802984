//! Intent resolution.
//!
//! Candidates are the static catalog followed by the dynamic intents. The
//! first intent (in list order) with a keyword (in keyword order) contained in
//! the normalized input wins. There is no scoring: a short generic keyword in
//! an early intent shadows a longer one further down the list.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::IntentCatalog;
use crate::intent::Intent;
use crate::normalize::normalize;

/// A matched intent together with the keyword that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub intent: Intent,
    pub keyword: String,
}

/// Matches input against the static catalog and a per-call dynamic list.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    catalog: Arc<IntentCatalog>,
}

impl IntentResolver {
    /// Create a resolver over a static catalog.
    pub fn new(catalog: Arc<IntentCatalog>) -> Self {
        Self { catalog }
    }

    /// The static catalog consulted first.
    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Normalize `raw_input` and find the first matching intent.
    pub fn resolve(&self, raw_input: &str, dynamic: &[Intent]) -> Option<IntentMatch> {
        self.resolve_normalized(&normalize(raw_input), dynamic)
    }

    /// Find the first matching intent for input that is already normalized.
    pub fn resolve_normalized(&self, normalized: &str, dynamic: &[Intent]) -> Option<IntentMatch> {
        let found = first_match(normalized, self.catalog.intents().iter().chain(dynamic));

        match &found {
            Some(m) => debug!(
                tag = %m.intent.tag,
                keyword = %m.keyword,
                dynamic = m.intent.is_dynamic(),
                "Resolved intent"
            ),
            None => debug!(input = normalized, "No intent matched"),
        }

        found
    }
}

/// First-match scan over candidates in order.
pub fn first_match<'a, I>(normalized: &str, candidates: I) -> Option<IntentMatch>
where
    I: IntoIterator<Item = &'a Intent>,
{
    candidates.into_iter().find_map(|intent| {
        intent.first_match(normalized).map(|keyword| IntentMatch {
            keyword: keyword.to_string(),
            intent: intent.clone(),
        })
    })
}
