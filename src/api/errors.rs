use thiserror::Error;

/// Failures surfaced by the backend adapter.
///
/// `Rejected` and `Transport` are shown to users the same way (a flash
/// message carrying `rejection` text or a generic fallback); the split is
/// kept so logs can tell "the backend said no" from "the request never made
/// it".
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record not found
    #[error("record not found")]
    NotFound,

    /// Backend answered with a non-2xx status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Request never completed (DNS, connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected envelope.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Input rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Fallback message applied when the backend rejects without a body.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "The request could not be completed. Please try again later.".to_string());
        ApiError::Rejected { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            ApiError::Transport(err.to_string())
        } else {
            ApiError::Unexpected(err.to_string())
        }
    }
}
