//! Text rendering of records and summaries

use std::io::{self, Write};

use bigdecimal::{BigDecimal, RoundingMode};

use crate::types::*;

/// Format an amount with exactly `precision` fractional digits
pub fn format_amount(amount: &BigDecimal, precision: u32) -> String {
    amount
        .with_scale_round(i64::from(precision), RoundingMode::HalfEven)
        .to_string()
}

/// One listing line for a record
pub fn format_record(record: &ExpenseRecord, precision: u32) -> String {
    format!(
        "Date: {}, Amount: {}, Category: {}, Description: {}",
        record.date(),
        format_amount(record.amount(), precision),
        record.category(),
        record.description()
    )
}

/// Write an expense listing, or the empty-result notice
pub fn write_expenses<W: Write>(
    out: &mut W,
    records: &[&ExpenseRecord],
    precision: u32,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No expenses found.");
    }

    writeln!(out, "\nExpenses:")?;
    for record in records {
        writeln!(out, "{}", format_record(record, precision))?;
    }
    Ok(())
}

/// Write the overall total followed by per-category totals
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &ExpenseSummary,
    precision: u32,
) -> io::Result<()> {
    if summary.is_empty() {
        return writeln!(out, "No expenses to summarize.");
    }

    writeln!(
        out,
        "\nOverall Total: {}",
        format_amount(&summary.total, precision)
    )?;
    writeln!(out, "Totals by Category:")?;
    for (category, amount) in &summary.by_category {
        writeln!(out, "{}: {}", category, format_amount(amount, precision))?;
    }
    Ok(())
}
