//! API-specific error types.

use thiserror::Error;

/// A specialized Result type for MILKEE API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the MILKEE API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. Carries the numeric status
    /// and the raw response body; never retried or classified further.
    #[error("MILKEE API error {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced an HTTP response (connect/IO failure).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body (or request body) did not serialize as expected.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a status error from a status code and body text.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
