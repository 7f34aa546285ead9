//! Reference lists used to populate the search form.

use serde::Serialize;

use crate::domain::types::{ClientId, FundId, SituationId};

/// Client that owns boletas.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
}

/// Investment fund whose shares are moved by boletas.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Fund {
    pub id: FundId,
    pub name: String,
}

/// Processing status a boleta can be in.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Situation {
    pub id: SituationId,
    pub name: String,
}

/// The three reference lists, always loaded together.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ReferenceData {
    pub clients: Vec<Client>,
    pub funds: Vec<Fund>,
    pub situations: Vec<Situation>,
}

impl ReferenceData {
    #[must_use]
    pub fn new(clients: Vec<Client>, funds: Vec<Fund>, situations: Vec<Situation>) -> Self {
        Self {
            clients,
            funds,
            situations,
        }
    }

    pub fn client_name(&self, id: &ClientId) -> Option<&str> {
        self.clients
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.as_str())
    }

    pub fn fund_name(&self, id: &FundId) -> Option<&str> {
        self.funds
            .iter()
            .find(|f| &f.id == id)
            .map(|f| f.name.as_str())
    }

    pub fn situation_name(&self, id: SituationId) -> Option<&str> {
        self.situations
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }
}
