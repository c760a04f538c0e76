//! Error types for entry source operations.

use thiserror::Error;

/// Result type for entry source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors returned while talking to the feed reader.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested resource does not exist on the server.
    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// The API key was rejected.
    #[error("Unauthorized request to {url} (status {status})")]
    Unauthorized { url: String, status: u16 },

    /// Any other non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Connection, timeout or body read failure.
    #[error("HTTP request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl SourceError {
    /// Whether this error means the server has nothing at the requested location.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}
