//! Search form for boletas and the draft it is reduced into.
//!
//! The query string is first deserialized into [`SearchTicketsForm`], then
//! replayed as [`DraftAction`]s onto an empty [`FilterDraft`]. Only
//! [`FilterDraft::submit`] produces the [`FilterCriteria`] used for the search,
//! which keeps "what the user is typing" and "what is being searched" apart.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::currency::{format_brl, parse_brl};
use crate::domain::criteria::{FilterCriteria, MAX_SELECTED_STATUSES};
use crate::domain::types::{ClientId, FundId, OperationType, SituationId, TicketCode};
use crate::forms::FormError;

/// Query parameters of the search page and of the JSON API.
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
pub struct SearchTicketsForm {
    #[serde(rename = "codigo_boleta", default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 64))]
    pub ticket_code: String,
    #[serde(rename = "cliente", default, skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    #[serde(rename = "fundo", default, skip_serializing_if = "String::is_empty")]
    pub fund_id: String,
    #[serde(rename = "situacoes", default, skip_serializing_if = "Vec::is_empty")]
    #[validate(length(max = 3, message = "at most 3 situations can be selected"))]
    pub statuses: Vec<i32>,
    #[serde(rename = "tipos_operacao", default, skip_serializing_if = "Vec::is_empty")]
    pub operation_types: Vec<String>,
    #[serde(rename = "data_inicio", default, skip_serializing_if = "String::is_empty")]
    pub date_from: String,
    #[serde(rename = "data_fim", default, skip_serializing_if = "String::is_empty")]
    pub date_to: String,
    /// Raw currency input, e.g. `R$ 200,00`.
    #[serde(rename = "valor_minimo", default, skip_serializing_if = "String::is_empty")]
    pub value_min: String,
    #[serde(rename = "valor_maximo", default, skip_serializing_if = "String::is_empty")]
    pub value_max: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

fn parse_form_date(raw: &str) -> Result<Option<NaiveDate>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map(Some)
        .map_err(|_| FormError::InvalidDate(raw.to_string()))
}

impl SearchTicketsForm {
    /// Validates the submitted fields and replays them onto an empty draft.
    pub fn to_draft(&self) -> Result<FilterDraft, FormError> {
        self.validate()?;

        let date_from = parse_form_date(&self.date_from)?;
        let date_to = parse_form_date(&self.date_to)?;
        let operation_types = self
            .operation_types
            .iter()
            .map(|code| {
                code.parse::<OperationType>()
                    .map_err(|_| FormError::InvalidOperationType(code.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.replay(date_from, date_to, operation_types))
    }

    /// Draft holding whatever fields parse, used to echo a rejected form.
    ///
    /// Unreadable dates and operation types are dropped and situations past
    /// [`MAX_SELECTED_STATUSES`] are ignored by the reducer.
    pub fn echo_draft(&self) -> FilterDraft {
        let date_from = parse_form_date(&self.date_from).ok().flatten();
        let date_to = parse_form_date(&self.date_to).ok().flatten();
        let operation_types = self
            .operation_types
            .iter()
            .filter_map(|code| code.parse::<OperationType>().ok())
            .collect();

        self.replay(date_from, date_to, operation_types)
    }

    fn replay(
        &self,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        operation_types: Vec<OperationType>,
    ) -> FilterDraft {
        let mut actions = vec![
            DraftAction::SetTicketCode(self.ticket_code.clone()),
            DraftAction::SelectClient(self.client_id.clone()),
            DraftAction::SelectFund(self.fund_id.clone()),
            DraftAction::SetDateFrom(date_from),
            DraftAction::SetDateTo(date_to),
            DraftAction::TypeValueMin(self.value_min.clone()),
            DraftAction::TypeValueMax(self.value_max.clone()),
        ];

        let mut statuses: Vec<SituationId> = Vec::new();
        for id in self.statuses.iter().copied().map(SituationId::new) {
            if !statuses.contains(&id) {
                statuses.push(id);
            }
        }
        actions.extend(statuses.into_iter().map(DraftAction::ToggleStatus));

        let mut unique_types: Vec<OperationType> = Vec::new();
        for op in operation_types {
            if !unique_types.contains(&op) {
                unique_types.push(op);
            }
        }
        actions.extend(unique_types.into_iter().map(DraftAction::ToggleOperationType));

        actions
            .into_iter()
            .fold(FilterDraft::default(), FilterDraft::reduce)
    }

    /// Query string of the current search without the page number.
    pub fn query_without_page(&self) -> String {
        let form = Self {
            page: None,
            ..self.clone()
        };
        serde_html_form::to_string(&form).unwrap_or_default()
    }
}

/// A single user edit of the search form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftAction {
    SetTicketCode(String),
    SelectClient(String),
    SelectFund(String),
    ToggleStatus(SituationId),
    ToggleOperationType(OperationType),
    SetDateFrom(Option<NaiveDate>),
    SetDateTo(Option<NaiveDate>),
    /// Raw text typed in the minimum value field.
    TypeValueMin(String),
    /// Raw text typed in the maximum value field.
    TypeValueMax(String),
    Clear,
}

/// Immutable state of the search form before it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterDraft {
    pub ticket_code: String,
    pub client_id: String,
    pub fund_id: String,
    /// Selected situations in selection order.
    pub statuses: Vec<SituationId>,
    pub operation_types: Vec<OperationType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub value_min_input: String,
    pub value_max_input: String,
}

impl FilterDraft {
    /// Applies one edit, returning the next draft.
    ///
    /// Selecting a situation beyond [`MAX_SELECTED_STATUSES`] leaves the
    /// draft unchanged.
    #[must_use]
    pub fn reduce(self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetTicketCode(code) => Self {
                ticket_code: code.trim().to_string(),
                ..self
            },
            DraftAction::SelectClient(id) => Self {
                client_id: id.trim().to_string(),
                ..self
            },
            DraftAction::SelectFund(id) => Self {
                fund_id: id.trim().to_string(),
                ..self
            },
            DraftAction::ToggleStatus(id) => {
                let mut statuses = self.statuses;
                if let Some(pos) = statuses.iter().position(|s| *s == id) {
                    statuses.remove(pos);
                } else if statuses.len() < MAX_SELECTED_STATUSES {
                    statuses.push(id);
                }
                Self { statuses, ..self }
            }
            DraftAction::ToggleOperationType(op) => {
                let mut operation_types = self.operation_types;
                if let Some(pos) = operation_types.iter().position(|o| *o == op) {
                    operation_types.remove(pos);
                } else {
                    operation_types.push(op);
                }
                Self {
                    operation_types,
                    ..self
                }
            }
            DraftAction::SetDateFrom(date_from) => Self { date_from, ..self },
            DraftAction::SetDateTo(date_to) => Self { date_to, ..self },
            DraftAction::TypeValueMin(raw) => Self {
                value_min_input: raw,
                ..self
            },
            DraftAction::TypeValueMax(raw) => Self {
                value_max_input: raw,
                ..self
            },
            DraftAction::Clear => Self::default(),
        }
    }

    /// Minimum value as it should be echoed back in the input.
    pub fn value_min_display(&self) -> String {
        format_brl(&self.value_min_input)
    }

    /// Maximum value as it should be echoed back in the input.
    pub fn value_max_display(&self) -> String {
        format_brl(&self.value_max_input)
    }

    /// Turns the draft into search criteria; blank fields become wildcards.
    pub fn submit(&self) -> Result<FilterCriteria, FormError> {
        let value_min = parse_brl(&self.value_min_input)
            .map_err(|_| FormError::InvalidAmount(self.value_min_input.clone()))?;
        let value_max = parse_brl(&self.value_max_input)
            .map_err(|_| FormError::InvalidAmount(self.value_max_input.clone()))?;

        if matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to) {
            return Err(FormError::InvertedDateRange);
        }
        if matches!((value_min, value_max), (Some(min), Some(max)) if min > max) {
            return Err(FormError::InvertedValueRange);
        }

        Ok(FilterCriteria {
            ticket_code: TicketCode::new(self.ticket_code.as_str()).ok(),
            client_id: ClientId::new(self.client_id.as_str()).ok(),
            fund_id: FundId::new(self.fund_id.as_str()).ok(),
            statuses: self.statuses.iter().copied().collect(),
            operation_types: self.operation_types.iter().copied().collect(),
            date_from: self.date_from,
            date_to: self.date_to,
            value_min,
            value_max,
        })
    }
}
