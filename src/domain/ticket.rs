use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::types::{ClientId, FundId, OperationType, SituationId, TicketCode};

/// A fund-share transaction ticket as returned by the remote service.
///
/// Only the identifier fields take part in filtering; the optional names are
/// carried for display.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TicketRecord {
    pub ticket_code: TicketCode,
    pub client_id: ClientId,
    pub client_name: Option<String>,
    pub fund_id: FundId,
    pub fund_name: Option<String>,
    pub status_id: SituationId,
    pub status_name: Option<String>,
    pub operation_type: OperationType,
    /// Calendar date of the operation, time of day already dropped.
    pub operation_date: NaiveDate,
    pub financial_value: Decimal,
    pub share_quantity: Option<Decimal>,
}

impl TicketRecord {
    /// Builds a record with only the fields used for filtering populated.
    #[must_use]
    pub fn new(
        ticket_code: TicketCode,
        client_id: ClientId,
        fund_id: FundId,
        status_id: SituationId,
        operation_type: OperationType,
        operation_date: NaiveDate,
        financial_value: Decimal,
    ) -> Self {
        Self {
            ticket_code,
            client_id,
            client_name: None,
            fund_id,
            fund_name: None,
            status_id,
            status_name: None,
            operation_type,
            operation_date,
            financial_value,
            share_quantity: None,
        }
    }
}
