use serde::Deserialize;

use crate::domain::reference::{
    Client as DomainClient, Fund as DomainFund, Situation as DomainSituation,
};
use crate::domain::types::{ClientId, FundId, SituationId, TypeConstraintError};

/// Item of `GET /v1/clientes`.
#[derive(Debug, Clone, Deserialize)]
pub struct Client {
    pub id: String,
    pub nome: String,
}

/// Item of `GET /v1/fundos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Fund {
    pub id: String,
    pub nome: String,
}

/// Item of `GET /v1/situacoes`.
#[derive(Debug, Clone, Deserialize)]
pub struct Situation {
    pub id: i32,
    pub nome: String,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: client.nome,
        })
    }
}

impl TryFrom<Fund> for DomainFund {
    type Error = TypeConstraintError;

    fn try_from(fund: Fund) -> Result<Self, Self::Error> {
        Ok(Self {
            id: FundId::new(fund.id)?,
            name: fund.nome,
        })
    }
}

impl From<Situation> for DomainSituation {
    fn from(situation: Situation) -> Self {
        Self {
            id: SituationId::new(situation.id),
            name: situation.nome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_into_domain() {
        let client: Client =
            serde_json::from_str(r#"{"id": "c-1", "nome": "Maria"}"#).expect("valid json");
        let domain = DomainClient::try_from(client).expect("valid client");
        assert_eq!(domain.id.as_str(), "c-1");
        assert_eq!(domain.name, "Maria");
    }

    #[test]
    fn blank_fund_id_is_rejected() {
        let fund = Fund {
            id: " ".to_string(),
            nome: "Fundo".to_string(),
        };
        assert_eq!(
            DomainFund::try_from(fund),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn situation_into_domain() {
        let situation: Situation =
            serde_json::from_str(r#"{"id": 5, "nome": "Liquidada"}"#).expect("valid json");
        let domain = DomainSituation::from(situation);
        assert_eq!(domain.id.get(), 5);
        assert_eq!(domain.name, "Liquidada");
    }
}
