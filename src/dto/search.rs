use serde::Serialize;

use crate::currency::format_amount;
use crate::domain::reference::ReferenceData;
use crate::domain::ticket::TicketRecord;
use crate::domain::types::OperationType;
use crate::forms::search::FilterDraft;
use crate::pagination::Paginated;

/// Entry of a select or multi-select input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<OperationType> for SelectOption {
    fn from(op: OperationType) -> Self {
        Self {
            value: op.code().to_string(),
            label: op.label().to_string(),
        }
    }
}

/// Options of every select on the search form.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub clients: Vec<SelectOption>,
    pub funds: Vec<SelectOption>,
    pub situations: Vec<SelectOption>,
    pub operation_types: Vec<SelectOption>,
    pub page_sizes: Vec<usize>,
}

impl FormOptions {
    pub fn new(reference: &ReferenceData, page_sizes: &[usize]) -> Self {
        Self {
            clients: reference
                .clients
                .iter()
                .map(|c| SelectOption {
                    value: c.id.to_string(),
                    label: c.name.clone(),
                })
                .collect(),
            funds: reference
                .funds
                .iter()
                .map(|f| SelectOption {
                    value: f.id.to_string(),
                    label: f.name.clone(),
                })
                .collect(),
            situations: reference
                .situations
                .iter()
                .map(|s| SelectOption {
                    value: s.id.to_string(),
                    label: s.name.clone(),
                })
                .collect(),
            operation_types: OperationType::ALL.into_iter().map(SelectOption::from).collect(),
            page_sizes: page_sizes.to_vec(),
        }
    }
}

/// A boleta formatted for the results table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketRow {
    pub code: String,
    pub client: String,
    pub fund: String,
    pub status: String,
    pub operation: String,
    pub operation_date: String,
    pub financial_value: String,
}

impl TicketRow {
    /// Resolves display names, falling back to the reference lists and then
    /// to the raw identifiers.
    pub fn new(record: TicketRecord, reference: &ReferenceData) -> Self {
        let client = record
            .client_name
            .or_else(|| reference.client_name(&record.client_id).map(str::to_string))
            .unwrap_or_else(|| record.client_id.to_string());
        let fund = record
            .fund_name
            .or_else(|| reference.fund_name(&record.fund_id).map(str::to_string))
            .unwrap_or_else(|| record.fund_id.to_string());
        let status = record
            .status_name
            .or_else(|| reference.situation_name(record.status_id).map(str::to_string))
            .unwrap_or_else(|| record.status_id.to_string());

        Self {
            code: record.ticket_code.into_inner(),
            client,
            fund,
            status,
            operation: record.operation_type.label().to_string(),
            operation_date: record.operation_date.format("%d/%m/%Y").to_string(),
            financial_value: format_amount(record.financial_value),
        }
    }
}

/// Data required to render the search template.
#[derive(Debug)]
pub struct SearchPageData {
    pub options: FormOptions,
    /// Form state echoed back into the inputs.
    pub draft: FilterDraft,
    /// Results of the search, absent when the form was rejected.
    pub tickets: Option<Paginated<TicketRow>>,
    /// Validation message to show above the form.
    pub form_error: Option<String>,
    /// Query string of the current search without `page`, for page links.
    pub query: String,
}
