//! Framework-free orchestration between routes and the backend adapter.

use thiserror::Error;

use crate::api::ApiError;

pub mod accounts;
pub mod catalog;
pub mod content;
pub mod earnings;
pub mod main;
pub mod plans;
pub mod support;
pub mod types;

/// Generic fallback shown when the backend gave us nothing quotable.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Api(ApiError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ApiError> for ServiceError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => ServiceError::NotFound,
            other => ServiceError::Api(other),
        }
    }
}

/// Folds validator output into one [`ServiceError::Form`] message.
pub(crate) fn form_error(errors: &validator::ValidationErrors) -> ServiceError {
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect::<Vec<_>>()
        .join("; ");

    if message.is_empty() {
        ServiceError::Form("Form validation failed.".to_string())
    } else {
        ServiceError::Form(message)
    }
}

impl ServiceError {
    /// Text for the user-facing error notification: the backend's own
    /// message when it rejected the request, a generic fallback for
    /// transport-level failures the user can do nothing about.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthorized => "You are not allowed to do that.".to_string(),
            ServiceError::NotFound => "The requested record no longer exists.".to_string(),
            ServiceError::Form(msg) | ServiceError::TypeConstraint(msg) => msg.clone(),
            ServiceError::Api(ApiError::Rejected { message, .. }) => message.clone(),
            ServiceError::Api(ApiError::Validation(msg)) => msg.clone(),
            ServiceError::Api(_) | ServiceError::Internal(_) => GENERIC_ERROR.to_string(),
        }
    }
}
