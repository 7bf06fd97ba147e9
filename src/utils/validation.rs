//! Validation utilities
//!
//! Turns raw text collected by the driver into typed record fields. A record
//! is only ever built after every field parsed, so the store never sees a
//! partially-constructed one.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::types::*;

/// Canonical textual form of a date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest decimal exponent, in either direction, an amount may carry
///
/// Sums and display rounding materialize every digit implied by the
/// exponent, so `1e400000000` would stall any later aggregate.
pub const MAX_AMOUNT_EXPONENT: i64 = 64;

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| ExpenseError::InvalidDate(format!("'{}': {}", input, e)))
}

/// Parse a signed decimal amount
pub fn parse_amount(input: &str) -> ExpenseResult<BigDecimal> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExpenseError::InvalidAmount(
            "Amount cannot be empty".to_string(),
        ));
    }

    let amount = BigDecimal::from_str(input)
        .map_err(|e| ExpenseError::InvalidAmount(format!("'{}': {}", input, e)))?;

    let (_, scale) = amount.as_bigint_and_exponent();
    if scale.abs() > MAX_AMOUNT_EXPONENT {
        return Err(ExpenseError::InvalidAmount(format!(
            "'{}': exponent exceeds {}",
            input, MAX_AMOUNT_EXPONENT
        )));
    }

    Ok(amount)
}

/// Build a record from raw text fields
///
/// Category and description are taken verbatim; they carry no constraints.
pub fn parse_record(
    date: &str,
    amount: &str,
    category: &str,
    description: &str,
) -> ExpenseResult<ExpenseRecord> {
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;
    Ok(ExpenseRecord::new(date, amount, category, description))
}
