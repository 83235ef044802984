//! Error types for themis operations.
//!
//! Errors only exist at the adapter boundary (backend fetches, usage reports,
//! catalog files). The reply pipeline converts every one of them into logged
//! degradation, so chat surfaces never see these values.

use thiserror::Error;

/// Result type alias for themis operations.
pub type ThemisResult<T> = Result<T, ThemisError>;

/// Main error type for all themis operations.
#[derive(Error, Debug)]
pub enum ThemisError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure talking to the intent backend.
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-success status.
    #[error("Backend returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend payload could not be understood.
    #[error("Parse error: {message}")]
    Parse { message: String, code: ErrorCode },

    /// The backend did not answer in time.
    #[error("Timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,
    NetBadStatus,

    // Parse (PARSE_xxx)
    ParseInvalidJson,
    ParseUnexpectedShape,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::NetBadStatus => "NET_003",
            ErrorCode::ParseInvalidJson => "PARSE_001",
            ErrorCode::ParseUnexpectedShape => "PARSE_002",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl ThemisError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: None,
        }
    }

    /// Create a network error that keeps the underlying cause.
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseInvalidJson,
        }
    }

    /// Create a parse error for a payload that is valid JSON but the wrong shape.
    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            code: ErrorCode::ParseUnexpectedShape,
        }
    }

    /// Convert from an HTTP status code and response body.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: body.to_string(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Network { code, .. } => *code,
            Self::Parse { code, .. } => *code,
            Self::Status { .. } => ErrorCode::NetBadStatus,
            Self::Timeout { .. } => ErrorCode::NetTimeout,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            Self::Serialization(_) => ErrorCode::ParseInvalidJson,
            Self::Io(_) => ErrorCode::Internal,
        }
    }

    /// Whether retrying the same call later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
