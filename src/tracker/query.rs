//! Query engine: filtered views and aggregates over a record sequence
//!
//! Every function here is a pure transformation of its input. Nothing is
//! mutated, nothing can fail, and calling twice gives the same answer.

use std::borrow::Borrow;

use bigdecimal::BigDecimal;

use crate::types::*;

/// Records matching `filter`, in their original relative order
///
/// Returns an empty vector when nothing matches.
pub fn filter<'a>(records: &'a [ExpenseRecord], filter: &ExpenseFilter) -> Vec<&'a ExpenseRecord> {
    let matched: Vec<&ExpenseRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    tracing::debug!(
        scanned = records.len(),
        matched = matched.len(),
        "filtered expenses"
    );
    matched
}

/// Sum of every amount; zero for an empty sequence
pub fn total<I, R>(records: I) -> BigDecimal
where
    I: IntoIterator<Item = R>,
    R: Borrow<ExpenseRecord>,
{
    records
        .into_iter()
        .fold(BigDecimal::from(0), |acc, record| acc + record.borrow().amount())
}

/// Sums grouped by the literal category string
///
/// Grouping is case-sensitive: "Food" and "food" are separate keys, even
/// though [`filter`] treats them as the same category. Keys come out in
/// order of first occurrence.
pub fn totals_by_category<I, R>(records: I) -> CategoryTotals
where
    I: IntoIterator<Item = R>,
    R: Borrow<ExpenseRecord>,
{
    let mut totals = CategoryTotals::new();
    for record in records {
        let record = record.borrow();
        match totals.get_mut(record.category()) {
            Some(sum) => *sum += record.amount(),
            None => {
                totals.insert(record.category().to_string(), record.amount().clone());
            }
        }
    }
    totals
}

/// Total, per-category totals and record count in one pass
pub fn summarize<I, R>(records: I) -> ExpenseSummary
where
    I: IntoIterator<Item = R>,
    R: Borrow<ExpenseRecord>,
{
    let mut summary = ExpenseSummary::default();
    for record in records {
        let record = record.borrow();
        summary.total += record.amount();
        match summary.by_category.get_mut(record.category()) {
            Some(sum) => *sum += record.amount(),
            None => {
                summary
                    .by_category
                    .insert(record.category().to_string(), record.amount().clone());
            }
        }
        summary.count += 1;
    }
    summary
}
