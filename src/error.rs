//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Exactly one of these three kinds reaches the caller of any fetch; the
/// fetch layer never swallows an error. Retry policy is the caller's concern
/// (see [`crate::http::retry`]).
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network/DNS/timeout — the request produced no usable response.
    /// Also covers response-body read and JSON decode failures from reqwest.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 429. Recoverable; the caller should back off before retrying.
    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    /// Any other non-success status, surfaced with the status code.
    #[error("API error: status {status}")]
    RequestFailed { status: u16, body: String },
}

impl HttpError {
    /// Map a non-success HTTP status to its error kind.
    ///
    /// `retry_after_ms` is the advisory `Retry-After` header (seconds),
    /// already converted to milliseconds, when the server sent one.
    pub fn from_status(status: u16, body: String, retry_after_ms: Option<u64>) -> Self {
        if status == 429 {
            HttpError::RateLimited { retry_after_ms }
        } else {
            HttpError::RequestFailed { status, body }
        }
    }

    /// Status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::RateLimited { .. } => Some(429),
            HttpError::RequestFailed { status, .. } => Some(*status),
            HttpError::Transport(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
