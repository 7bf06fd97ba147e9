//! Core types and data structures for the expense tracker

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single logged expense
///
/// Records are immutable once built: the store only ever appends them and
/// hands them back out by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date the expense was incurred on
    date: NaiveDate,
    /// Signed amount, no currency unit
    amount: BigDecimal,
    /// Free-text label, matched case-insensitively by filters
    category: String,
    /// Free-text description
    description: String,
}

impl ExpenseRecord {
    /// Create a new expense record from already-validated fields
    pub fn new(
        date: NaiveDate,
        amount: BigDecimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Predicate narrowing a record set by date range and/or category
///
/// Every constraint is optional and they combine with logical AND. Both date
/// bounds are inclusive. The category is compared ignoring letter case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// A filter that matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep records dated on or after `start`
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.date_start = Some(start);
        self
    }

    /// Only keep records dated on or before `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.date_end = Some(end);
        self
    }

    /// Only keep records inside the inclusive range `start..=end`
    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.since(start).until(end)
    }

    /// Only keep records whose category equals `category` ignoring case
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check a single record against every constraint of this filter
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(start) = self.date_start {
            if record.date < start {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if record.date > end {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if record.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        true
    }
}

/// Per-category sums keyed by the literal category string, in order of first occurrence
pub type CategoryTotals = IndexMap<String, BigDecimal>;

/// Aggregate figures over a set of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Sum of every amount
    pub total: BigDecimal,
    /// Sums grouped by exact-case category
    pub by_category: CategoryTotals,
    /// Number of records aggregated
    pub count: usize,
}

impl ExpenseSummary {
    /// Whether the summary was built from no records at all
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for ExpenseSummary {
    fn default() -> Self {
        Self {
            total: BigDecimal::from(0),
            by_category: CategoryTotals::new(),
            count: 0,
        }
    }
}

/// Errors raised while turning raw input into typed values
///
/// The store and query engine never fail; these only surface at the
/// text boundary and in configuration.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
