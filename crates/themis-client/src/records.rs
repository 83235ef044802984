//! Wire shapes of the intent management backend.
//!
//! The backend contract is loose: the listing may be wrapped, ids may be
//! numbers or strings and list columns may be null. Everything is validated
//! here so that the core only ever sees well-formed [`Intent`]s.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

use themis_core::{Intent, ThemisError, ThemisResult};

/// Backend identifier, numeric (serial column) or textual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => f.write_str(id),
        }
    }
}

/// An uploaded document attached to an intent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// One row of `GET /intents`.
#[derive(Debug, Clone, Deserialize)]
pub struct IntentRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    #[serde(default)]
    pub responses: Option<Vec<String>>,
    #[serde(default)]
    pub files: Option<Vec<FileRecord>>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub faq: Option<bool>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub usage_count: Option<u64>,
}

/// Counter column that may arrive as a number or a numeric string
/// (Postgres `bigint`/`numeric`). Anything else reads as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    Ok(count)
}

/// Flag column that may arrive as a bool, `0`/`1` or `"true"`/`"false"`.
/// Anything else reads as absent.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => Some(true),
            "false" | "f" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    Ok(flag)
}

impl IntentRecord {
    /// Convert into an [`Intent`].
    ///
    /// Patterns are normalized, a record without responses gets the
    /// placeholder, and only the first file is surfaced.
    pub fn into_intent(self) -> Intent {
        let file = self
            .files
            .and_then(|files| files.into_iter().next())
            .and_then(|f| f.path)
            .filter(|path| !path.is_empty());

        let mut intent = Intent::new(
            self.title.unwrap_or_default(),
            self.patterns.unwrap_or_default(),
            self.responses.unwrap_or_default(),
        )
        .with_usage_count(self.usage_count.unwrap_or(0))
        .with_faq(self.faq.unwrap_or(false));

        intent.id = self.id.map(|id| id.to_string());
        intent.file = file;
        intent
    }
}

/// Body of `POST /intents/{id}/use`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub new_count: Option<u64>,
}

/// Parse a listing payload into intents.
///
/// Accepts a bare array or an object wrapping it under `intents` or `rows`.
/// Any other shape yields an empty list. Individual rows that do not fit the
/// record shape are skipped.
pub fn parse_listing(body: &str) -> ThemisResult<Vec<Intent>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ThemisError::parse(format!("Invalid intents payload: {}", e)))?;

    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("intents").or_else(|| map.remove("rows")) {
            Some(Value::Array(rows)) => rows,
            _ => {
                warn!("Intents payload is an object without an intent list, treating as empty");
                Vec::new()
            }
        },
        other => {
            warn!(kind = value_kind(&other), "Intents payload is not a list, treating as empty");
            Vec::new()
        }
    };

    Ok(rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<IntentRecord>(row) {
            Ok(record) => Some(record.into_intent()),
            Err(e) => {
                warn!(index, error = %e, "Skipping malformed intent record");
                None
            }
        })
        .collect())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
