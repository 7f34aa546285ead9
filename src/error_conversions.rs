//! Error conversion glue between layers.
//!
//! The domain layer must not depend on gateway or service error types, so the
//! conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::gateway::errors::GatewayError;
use crate::pagination::PaginationError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for GatewayError {
    fn from(val: TypeConstraintError) -> Self {
        GatewayError::InvalidRecord(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<PaginationError> for ServiceError {
    fn from(val: PaginationError) -> Self {
        match val {
            PaginationError::PageOutOfRange { page, total_pages } => {
                ServiceError::PageOutOfRange { page, total_pages }
            }
            PaginationError::ZeroPageSize => ServiceError::Form(val.to_string()),
        }
    }
}
