//! Intent and reply types.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Response substituted when an intent is defined without any responses.
pub const MISSING_RESPONSE_PLACEHOLDER: &str = "Respuesta no definida";

/// A trigger-response unit: keyword set, response set and optional attachment.
///
/// Static intents have no `id`; dynamic intents carry the backend's
/// identifier, which is only ever used for usage reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Backend identifier (dynamic intents only). Opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable label. Not used for matching.
    pub tag: String,
    /// Normalized trigger phrases, checked in order.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Responses, joined with a space when replying. Never empty.
    #[serde(default)]
    pub responses: Vec<String>,
    /// Single attachment reference (server-relative path or URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Times the backend has recorded this intent as used.
    #[serde(default)]
    pub usage_count: u64,
    /// Whether curators flagged this intent for the FAQ surface.
    #[serde(default)]
    pub faq: bool,
}

impl Intent {
    /// Create an intent, normalizing its keywords and guaranteeing a response.
    pub fn new<K, R>(tag: impl Into<String>, keywords: K, responses: R) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            id: None,
            tag: tag.into(),
            keywords: keywords.into_iter().map(|k| normalize(k.as_ref())).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
            file: None,
            usage_count: 0,
            faq: false,
        }
        .ensure_responses(MISSING_RESPONSE_PLACEHOLDER)
    }

    /// Builder method to set the backend id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder method to set the attachment.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Builder method to set the usage counter.
    pub fn with_usage_count(mut self, count: u64) -> Self {
        self.usage_count = count;
        self
    }

    /// Builder method to set the FAQ flag.
    pub fn with_faq(mut self, faq: bool) -> Self {
        self.faq = faq;
        self
    }

    /// Substitute `placeholder` as the sole response if there are none.
    pub fn ensure_responses(mut self, placeholder: &str) -> Self {
        if self.responses.is_empty() {
            self.responses.push(placeholder.to_string());
        }
        self
    }

    /// Re-normalize keywords. Used for intents deserialized from files.
    pub(crate) fn normalized(mut self) -> Self {
        self.keywords = self.keywords.iter().map(|k| normalize(k)).collect();
        self
    }

    /// Whether this intent was sourced from the backend.
    pub fn is_dynamic(&self) -> bool {
        self.id.is_some()
    }

    /// Find the first keyword contained in already-normalized input.
    ///
    /// Empty keywords never match.
    pub fn first_match(&self, normalized_input: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| !keyword.is_empty() && normalized_input.contains(keyword))
    }
}

/// Reply handed back to the chat surface. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Composed reply text.
    pub text: String,
    /// Attachment reference, if the matched intent has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_keywords() {
        let intent = Intent::new("Matricula", ["Matrícula", "¿Inscripción?"], ["ok"]);
        assert_eq!(intent.keywords, vec!["matricula", "inscripcion"]);
        assert!(!intent.is_dynamic());
    }

    #[test]
    fn test_empty_responses_get_placeholder() {
        let intent = Intent::new("Vacio", ["x"], Vec::<String>::new());
        assert_eq!(intent.responses, vec![MISSING_RESPONSE_PLACEHOLDER]);
    }

    #[test]
    fn test_first_match_in_keyword_order() {
        let intent = Intent::new("Saludo", ["buenos dias", "hola"], ["Hola"]);
        assert_eq!(intent.first_match("hola buenos dias"), Some("buenos dias"));
        assert_eq!(intent.first_match("hola"), Some("hola"));
        assert_eq!(intent.first_match("adios"), None);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let intent = Intent::new("Vacio", [""], ["nunca"]);
        assert_eq!(intent.first_match("cualquier cosa"), None);
        assert_eq!(intent.first_match(""), None);

        let no_keywords = Intent::new("Sin claves", Vec::<String>::new(), ["nunca"]);
        assert_eq!(no_keywords.first_match("hola"), None);
    }

    #[test]
    fn test_match_result_omits_missing_file() {
        let result = MatchResult {
            text: "hola".to_string(),
            file: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"text":"hola"}"#);
    }
}
