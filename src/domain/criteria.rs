use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::types::{ClientId, FundId, OperationType, SituationId, TicketCode};

/// Maximum number of situations that can be selected in a single search.
pub const MAX_SELECTED_STATUSES: usize = 3;

/// Filter applied to a boleta search.
///
/// Every field is an independent criterion. `None` and empty sets are
/// wildcards; bounds are inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub ticket_code: Option<TicketCode>,
    pub client_id: Option<ClientId>,
    pub fund_id: Option<FundId>,
    pub statuses: BTreeSet<SituationId>,
    pub operation_types: BTreeSet<OperationType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub value_min: Option<Decimal>,
    pub value_max: Option<Decimal>,
}

impl FilterCriteria {
    /// Criteria matching every record.
    pub fn wildcard() -> Self {
        Self::default()
    }

    pub fn ticket_code(mut self, code: TicketCode) -> Self {
        self.ticket_code = Some(code);
        self
    }

    pub fn client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn fund(mut self, fund_id: FundId) -> Self {
        self.fund_id = Some(fund_id);
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = SituationId>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn operation_types(mut self, types: impl IntoIterator<Item = OperationType>) -> Self {
        self.operation_types = types.into_iter().collect();
        self
    }

    pub fn date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    pub fn value_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.value_min = min;
        self.value_max = max;
        self
    }

    /// Returns `true` when no criterion restricts the result.
    pub fn is_wildcard(&self) -> bool {
        *self == Self::default()
    }
}
