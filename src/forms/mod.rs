//! Form definitions backing the search routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("unknown operation type: {0}")]
    InvalidOperationType(String),

    #[error("start date is after end date")]
    InvertedDateRange,

    #[error("minimum value is greater than maximum value")]
    InvertedValueRange,
}
