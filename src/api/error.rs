//! Catalog API error types
//!
//! Every runtime failure of a catalog request (network failure, non-2xx
//! status, undecodable body) collapses into `RequestFailed`. The cause is
//! kept for the log file only; the UI never shows it.

use thiserror::Error;

/// API-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be completed or its body could not be decoded
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientSetup(String),
}

impl ApiError {
    /// Build a `RequestFailed` error for `url` from any displayable cause
    pub fn request_failed(url: &str, reason: impl std::fmt::Display) -> Self {
        Self::RequestFailed {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
