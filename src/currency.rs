//! Brazilian Real formatting for currency inputs and table values.
//!
//! Raw inputs are interpreted as a count of cents so typing `123456` reads as
//! `R$ 1.234,56`. A raw input without any digit is "unset" and formats as an
//! empty string, unlike `0` which formats as `R$ 0,00`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::types::TypeConstraintError;

/// Currency symbol followed by the non-breaking space used by pt-BR locales.
pub const CURRENCY_PREFIX: &str = "R$\u{a0}";

const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Inserts the thousands separator every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

fn render(negative: bool, units: &str, cents: &str) -> String {
    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_PREFIX}{}{DECIMAL_SEPARATOR}{cents}",
        group_thousands(units)
    )
}

/// Formats a raw user input as a BRL amount, reading its digits as cents.
///
/// Returns an empty string when the input holds no digit at all.
pub fn format_brl(raw: &str) -> String {
    let digits = digits_of(raw);
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (units, cents) = padded.split_at(padded.len() - 2);

    render(false, units, cents)
}

/// Parses a raw user input into a decimal amount with two fraction digits.
///
/// `Ok(None)` means the input held no digit. Inputs too large for
/// [`Decimal`] are rejected.
pub fn parse_brl(raw: &str) -> Result<Option<Decimal>, TypeConstraintError> {
    let digits = digits_of(raw);
    if digits.is_empty() {
        return Ok(None);
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(Some(Decimal::new(0, 2)));
    }

    let out_of_range = || TypeConstraintError::InvalidValue(format!("amount out of range: {raw}"));
    let cents = significant.parse::<i128>().map_err(|_| out_of_range())?;
    Decimal::try_from_i128_with_scale(cents, 2)
        .map(Some)
        .map_err(|_| out_of_range())
}

/// Formats an already numeric amount, rounding half away from zero to cents.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = rounded.abs().to_string();
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    render(negative, units, cents)
}
