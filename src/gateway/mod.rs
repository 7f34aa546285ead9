//! Access to the remote, read-only boletas service.

use crate::domain::criteria::FilterCriteria;
use crate::domain::reference::{Client, Fund, Situation};
use crate::domain::ticket::TicketRecord;
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpGateway;

#[allow(async_fn_in_trait)]
pub trait ReferenceReader {
    async fn list_clients(&self) -> GatewayResult<Vec<Client>>;
    async fn list_funds(&self) -> GatewayResult<Vec<Fund>>;
    async fn list_situations(&self) -> GatewayResult<Vec<Situation>>;
}

#[allow(async_fn_in_trait)]
pub trait TicketReader {
    /// Searches boletas, forwarding `criteria` so the service can filter.
    ///
    /// Implementations may return records that do not match; callers refine
    /// the result with [`crate::filter::apply`].
    async fn search_tickets(&self, criteria: &FilterCriteria) -> GatewayResult<Vec<TicketRecord>>;
}
