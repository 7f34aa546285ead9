//! Predicate engine selecting boletas that satisfy a [`FilterCriteria`].

use std::collections::BTreeSet;

use crate::domain::criteria::FilterCriteria;
use crate::domain::ticket::TicketRecord;

/// `true` when the criterion is absent or equal to the value.
fn equals_or_wildcard<T: PartialEq + ?Sized>(criterion: Option<&T>, value: &T) -> bool {
    criterion.is_none_or(|expected| expected == value)
}

/// `true` when the set is empty or contains the value.
fn member_or_wildcard<T: Ord>(set: &BTreeSet<T>, value: &T) -> bool {
    set.is_empty() || set.contains(value)
}

/// `true` when the value lies inside the inclusive, possibly open, range.
fn within<T: PartialOrd>(min: Option<&T>, max: Option<&T>, value: &T) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

impl FilterCriteria {
    /// Checks a single record against every criterion.
    pub fn matches(&self, record: &TicketRecord) -> bool {
        equals_or_wildcard(self.ticket_code.as_ref(), &record.ticket_code)
            && equals_or_wildcard(self.client_id.as_ref(), &record.client_id)
            && equals_or_wildcard(self.fund_id.as_ref(), &record.fund_id)
            && member_or_wildcard(&self.statuses, &record.status_id)
            && member_or_wildcard(&self.operation_types, &record.operation_type)
            && within(
                self.date_from.as_ref(),
                self.date_to.as_ref(),
                &record.operation_date,
            )
            && within(
                self.value_min.as_ref(),
                self.value_max.as_ref(),
                &record.financial_value,
            )
    }
}

/// Returns the records matching `criteria`, preserving their relative order.
pub fn apply(criteria: &FilterCriteria, records: Vec<TicketRecord>) -> Vec<TicketRecord> {
    if criteria.is_wildcard() {
        return records;
    }
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::types::{ClientId, FundId, OperationType, SituationId, TicketCode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn record(code: &str, status: i32, value: Decimal) -> TicketRecord {
        TicketRecord::new(
            TicketCode::new(code).expect("valid code"),
            ClientId::new("c1").expect("valid client"),
            FundId::new("f1").expect("valid fund"),
            SituationId::new(status),
            OperationType::Application,
            date(2024, 3, 15),
            value,
        )
    }

    fn sample() -> Vec<TicketRecord> {
        vec![
            record("1", 1, dec!(10.00)),
            record("2", 2, dec!(150.00)),
            record("3", 5, dec!(50.00)),
            record("4", 5, dec!(150.00)),
        ]
    }

    fn codes(records: &[TicketRecord]) -> Vec<&str> {
        records.iter().map(|r| r.ticket_code.as_str()).collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let criteria = FilterCriteria::wildcard().statuses([SituationId::new(1)]);
        assert!(apply(&criteria, Vec::new()).is_empty());
        assert!(apply(&FilterCriteria::wildcard(), Vec::new()).is_empty());
    }

    #[test]
    fn wildcard_criteria_keeps_records_in_order() {
        let records = sample();
        assert_eq!(apply(&FilterCriteria::wildcard(), records.clone()), records);
    }

    #[test]
    fn status_and_minimum_value_are_conjunctive() {
        let criteria = FilterCriteria::wildcard()
            .statuses([SituationId::new(2), SituationId::new(5)])
            .value_range(Some(dec!(100.00)), None);

        let result = apply(&criteria, sample());

        assert_eq!(codes(&result), vec!["2", "4"]);
        assert!(criteria.matches(&record("x", 5, dec!(150.00))));
        assert!(!criteria.matches(&record("x", 5, dec!(50.00))));
    }

    #[test]
    fn identifiers_match_exactly() {
        let mut other_client = record("5", 1, dec!(1));
        other_client.client_id = ClientId::new("C1").expect("valid client");
        let mut records = sample();
        records.push(other_client);

        let by_client = FilterCriteria::wildcard().client(ClientId::new("C1").expect("valid"));
        assert_eq!(codes(&apply(&by_client, records.clone())), vec!["5"]);

        let by_code = FilterCriteria::wildcard().ticket_code(TicketCode::new("3").expect("valid"));
        assert_eq!(codes(&apply(&by_code, records.clone())), vec!["3"]);

        let by_fund = FilterCriteria::wildcard().fund(FundId::new("f2").expect("valid"));
        assert!(apply(&by_fund, records).is_empty());
    }

    #[test]
    fn operation_types_filter_by_membership() {
        let mut redemption = record("9", 1, dec!(1));
        redemption.operation_type = OperationType::TotalRedemption;
        let mut records = sample();
        records.push(redemption);

        let criteria = FilterCriteria::wildcard().operation_types([
            OperationType::PartialRedemption,
            OperationType::TotalRedemption,
        ]);

        assert_eq!(codes(&apply(&criteria, records)), vec!["9"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let record = record("1", 1, dec!(1));

        let exact = FilterCriteria::wildcard()
            .date_range(Some(date(2024, 3, 15)), Some(date(2024, 3, 15)));
        assert!(exact.matches(&record));

        let after = FilterCriteria::wildcard().date_range(Some(date(2024, 3, 16)), None);
        assert!(!after.matches(&record));

        let before = FilterCriteria::wildcard().date_range(None, Some(date(2024, 3, 14)));
        assert!(!before.matches(&record));
    }

    #[test]
    fn value_bounds_are_inclusive() {
        let record = record("1", 1, dec!(100.00));

        let exact = FilterCriteria::wildcard().value_range(Some(dec!(100)), Some(dec!(100.00)));
        assert!(exact.matches(&record));

        let above = FilterCriteria::wildcard().value_range(None, Some(dec!(99.99)));
        assert!(!above.matches(&record));
    }
}
