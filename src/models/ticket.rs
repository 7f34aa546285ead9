use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::criteria::FilterCriteria;
use crate::domain::ticket::TicketRecord;
use crate::domain::types::{ClientId, FundId, SituationId, TicketCode, TypeConstraintError};

/// Reads the calendar date of an operation.
///
/// Accepts plain dates, RFC 3339 timestamps and naive timestamps. The time of
/// day is dropped without any timezone conversion, so the date is the one
/// written by the remote service.
pub fn parse_operation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok())
}

fn deserialize_operation_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_operation_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid operation date: {raw}")))
}

/// Item of the `elementos` list returned by the boletas search.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "idCliente")]
    pub client_id: String,
    #[serde(rename = "nomeCliente", default)]
    pub client_name: Option<String>,
    #[serde(rename = "idFundo")]
    pub fund_id: String,
    #[serde(rename = "nomeFundo", default)]
    pub fund_name: Option<String>,
    #[serde(rename = "idSituacao")]
    pub status_id: i32,
    #[serde(rename = "nomeSituacao", default)]
    pub status_name: Option<String>,
    #[serde(rename = "tipoOperacao")]
    pub operation_type: String,
    #[serde(
        rename = "dataOperacao",
        deserialize_with = "deserialize_operation_date"
    )]
    pub operation_date: NaiveDate,
    #[serde(rename = "valorFinanceiro")]
    pub financial_value: Decimal,
    #[serde(rename = "quantidadeCotas", default)]
    pub share_quantity: Option<Decimal>,
}

/// Body of `GET /v1/boletas-cota-fundo/pesquisar`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "elementos", default)]
    pub elements: Vec<Ticket>,
}

impl TryFrom<Ticket> for TicketRecord {
    type Error = TypeConstraintError;

    fn try_from(ticket: Ticket) -> Result<Self, Self::Error> {
        Ok(Self {
            ticket_code: TicketCode::new(ticket.code)?,
            client_id: ClientId::new(ticket.client_id)?,
            client_name: ticket.client_name,
            fund_id: FundId::new(ticket.fund_id)?,
            fund_name: ticket.fund_name,
            status_id: SituationId::new(ticket.status_id),
            status_name: ticket.status_name,
            operation_type: ticket.operation_type.parse()?,
            operation_date: ticket.operation_date,
            financial_value: ticket.financial_value,
            share_quantity: ticket.share_quantity,
        })
    }
}

/// Query string forwarded to the remote search so it can filter server-side.
///
/// Wildcard criteria are omitted; sets become repeated keys.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SearchParams {
    #[serde(rename = "codigoBoleta", skip_serializing_if = "Option::is_none")]
    pub ticket_code: Option<String>,
    #[serde(rename = "cliente", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "fundo", skip_serializing_if = "Option::is_none")]
    pub fund_id: Option<String>,
    #[serde(rename = "situacoes", skip_serializing_if = "Vec::is_empty")]
    pub statuses: Vec<i32>,
    #[serde(rename = "tiposOperacao", skip_serializing_if = "Vec::is_empty")]
    pub operation_types: Vec<String>,
    #[serde(rename = "dataInicio", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(rename = "valorMinimo", skip_serializing_if = "Option::is_none")]
    pub value_min: Option<Decimal>,
    #[serde(rename = "valorMaximo", skip_serializing_if = "Option::is_none")]
    pub value_max: Option<Decimal>,
}

impl From<&FilterCriteria> for SearchParams {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            ticket_code: criteria.ticket_code.as_ref().map(|c| c.to_string()),
            client_id: criteria.client_id.as_ref().map(|c| c.to_string()),
            fund_id: criteria.fund_id.as_ref().map(|f| f.to_string()),
            statuses: criteria.statuses.iter().map(|s| s.get()).collect(),
            operation_types: criteria
                .operation_types
                .iter()
                .map(|op| op.code().to_string())
                .collect(),
            date_from: criteria.date_from,
            date_to: criteria.date_to,
            value_min: criteria.value_min,
            value_max: criteria.value_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::types::OperationType;

    #[test]
    fn operation_date_drops_time_of_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_operation_date("2024-03-15"), expected);
        assert_eq!(parse_operation_date("2024-03-15T23:59:59"), expected);
        assert_eq!(parse_operation_date("2024-03-15T23:59:59.123"), expected);
        assert_eq!(parse_operation_date("2024-03-15T23:30:00-03:00"), expected);
        assert_eq!(parse_operation_date("15/03/2024"), expected);
        assert_eq!(parse_operation_date("March 15"), None);
    }

    #[test]
    fn ticket_into_domain() {
        let json = r#"{
            "codigo": "123",
            "idCliente": "c1",
            "nomeCliente": "Maria",
            "idFundo": "f1",
            "idSituacao": 5,
            "tipoOperacao": "RP",
            "dataOperacao": "2024-03-15T10:00:00Z",
            "valorFinanceiro": 150.5
        }"#;
        let ticket: Ticket = serde_json::from_str(json).expect("valid json");
        let record = TicketRecord::try_from(ticket).expect("valid ticket");

        assert_eq!(record.ticket_code.as_str(), "123");
        assert_eq!(record.client_name.as_deref(), Some("Maria"));
        assert_eq!(record.fund_name, None);
        assert_eq!(record.status_id.get(), 5);
        assert_eq!(record.operation_type, OperationType::PartialRedemption);
        assert_eq!(record.financial_value, dec!(150.5));
    }

    #[test]
    fn unknown_operation_type_is_rejected() {
        let json = r#"{
            "codigo": "1", "idCliente": "c1", "idFundo": "f1", "idSituacao": 1,
            "tipoOperacao": "X", "dataOperacao": "2024-03-15", "valorFinanceiro": "1.00"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).expect("valid json");
        assert_eq!(
            TicketRecord::try_from(ticket),
            Err(TypeConstraintError::UnknownOperationType("X".to_string()))
        );
    }

    #[test]
    fn search_response_defaults_to_empty() {
        let response: SearchResponse = serde_json::from_str("{}").expect("valid json");
        assert!(response.elements.is_empty());
    }

    #[test]
    fn search_params_omit_wildcards_and_repeat_sets() {
        let criteria = FilterCriteria::wildcard()
            .client(ClientId::new("c1").expect("valid"))
            .statuses([SituationId::new(5), SituationId::new(2)])
            .operation_types([OperationType::Application])
            .value_range(Some(dec!(100.00)), None);

        let query = serde_html_form::to_string(SearchParams::from(&criteria)).expect("serializes");

        assert_eq!(
            query,
            "cliente=c1&situacoes=2&situacoes=5&tiposOperacao=A&valorMinimo=100.00"
        );
        assert_eq!(
            serde_html_form::to_string(SearchParams::from(&FilterCriteria::wildcard()))
                .expect("serializes"),
            ""
        );
    }
}
