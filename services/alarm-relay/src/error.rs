//! Error types for the alarm relay

/// Errors that can occur while relaying an alarm
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Envelope contains no records")]
    EmptyEnvelope,
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;
