//! Mock gateway implementations for isolating services in tests.

use mockall::mock;

use crate::domain::criteria::FilterCriteria;
use crate::domain::reference::{Client, Fund, Situation};
use crate::domain::ticket::TicketRecord;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{ReferenceReader, TicketReader};

mock! {
    pub Gateway {}

    impl ReferenceReader for Gateway {
        async fn list_clients(&self) -> GatewayResult<Vec<Client>>;
        async fn list_funds(&self) -> GatewayResult<Vec<Fund>>;
        async fn list_situations(&self) -> GatewayResult<Vec<Situation>>;
    }

    impl TicketReader for Gateway {
        async fn search_tickets(&self, criteria: &FilterCriteria) -> GatewayResult<Vec<TicketRecord>>;
    }
}
