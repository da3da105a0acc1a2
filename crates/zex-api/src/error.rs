//! API error types.

use thiserror::Error;

/// Errors that can occur when fetching a snapshot from the ZenMoney API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body is not a valid diff response.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
