//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::ticket::TicketRecord;
use crate::pagination::Paginated;

/// Result payload returned by [`crate::services::api::list_tickets`].
#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    /// Number of boletas matching the filter.
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    /// Boletas on the requested page.
    pub items: Vec<TicketRecord>,
}

impl From<Paginated<TicketRecord>> for TicketsResponse {
    fn from(page: Paginated<TicketRecord>) -> Self {
        Self {
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            page_size: page.page_size,
            items: page.items,
        }
    }
}

/// Body returned by the JSON API when a request fails.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
