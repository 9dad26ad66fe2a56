//! Error types for the source adapters

use thiserror::Error;

/// Errors that can occur while fetching a single source
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not finish within the per-call timeout
    #[error("Request timed out")]
    Timeout,

    /// Source returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Failed to parse the payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Keyed source reached an adapter without a key
    #[error("Missing API key for {0}")]
    MissingApiKey(String),

    /// Source definition cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SourceError::Timeout
        } else {
            SourceError::RequestFailed(e.to_string())
        }
    }
}
