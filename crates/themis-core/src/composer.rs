//! Reply composition.

use crate::intent::MatchResult;
use crate::resolver::IntentMatch;

/// Reply used when no intent matches.
pub const FALLBACK_REPLY: &str = "Lo siento, no entendí eso. ¿Puedes reformular tu pregunta?";

/// Turns a resolution into the text and attachment shown to the user.
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    fallback_reply: String,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new(FALLBACK_REPLY)
    }
}

impl ResponseComposer {
    /// Create a composer with a custom no-match reply.
    pub fn new(fallback_reply: impl Into<String>) -> Self {
        Self {
            fallback_reply: fallback_reply.into(),
        }
    }

    /// Compose the reply.
    ///
    /// All responses of the matched intent are joined with a single space, so
    /// the same intent always yields the same text.
    pub fn compose(&self, matched: Option<&IntentMatch>) -> MatchResult {
        match matched {
            Some(m) => MatchResult {
                text: m.intent.responses.join(" "),
                file: m.intent.file.clone(),
            },
            None => MatchResult {
                text: self.fallback_reply.clone(),
                file: None,
            },
        }
    }
}
