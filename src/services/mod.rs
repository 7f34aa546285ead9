//! Use cases behind the search page and the JSON API.

use thiserror::Error;

use crate::gateway::errors::GatewayError;

pub mod api;
pub mod search;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to load reference data: {0}")]
    ReferenceDataLoad(#[source] GatewayError),

    #[error("failed to load boletas: {0}")]
    SearchLoad(#[source] GatewayError),

    #[error("invalid form: {0}")]
    Form(String),

    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Message shown to the user in place of the normal view.
    ///
    /// Gateway failures share one message per kind whatever the cause.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::ReferenceDataLoad(_) => {
                "Erro ao carregar os filtros. Tente novamente mais tarde.".to_string()
            }
            ServiceError::SearchLoad(_) => {
                "Erro ao carregar as boletas. Tente novamente mais tarde.".to_string()
            }
            ServiceError::Form(message) => format!("Filtros inválidos: {message}"),
            ServiceError::PageOutOfRange { page, total_pages } => {
                format!("A página {page} não existe. Total de páginas: {total_pages}.")
            }
        }
    }
}
