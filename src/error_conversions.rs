//! Error conversion glue between the domain's value-object errors and the
//! adapter/service error types.
//!
//! The domain layer must not depend on service or adapter error types, so
//! the conversions live here instead.

use crate::api::ApiError;
use crate::domain::types::TypeConstraintError;
#[cfg(feature = "server")]
use crate::services::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for ApiError {
    fn from(val: TypeConstraintError) -> Self {
        ApiError::Validation(val.to_string())
    }
}
