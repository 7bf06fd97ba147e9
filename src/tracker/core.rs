//! Session object that owns the expense store for one run

use bigdecimal::BigDecimal;

use crate::tracker::query;
use crate::traits::*;
use crate::types::*;
use crate::utils::MemoryStorage;

/// Expense tracker that owns a store and answers queries over it
pub struct ExpenseTracker<S: ExpenseStorage = MemoryStorage> {
    storage: S,
}

impl ExpenseTracker<MemoryStorage> {
    /// Create a tracker backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}

impl Default for ExpenseTracker<MemoryStorage> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<S: ExpenseStorage> ExpenseTracker<S> {
    /// Create a new tracker with the given storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Record a new, already-validated expense
    pub fn add_expense(&mut self, record: ExpenseRecord) {
        tracing::debug!(
            date = %record.date(),
            amount = %record.amount(),
            category = record.category(),
            "recording expense"
        );
        self.storage.append(record);
    }

    /// Every recorded expense in insertion order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        self.storage.all()
    }

    /// Expenses matching `filter`
    pub fn view(&self, filter: &ExpenseFilter) -> Vec<&ExpenseRecord> {
        query::filter(self.storage.all(), filter)
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> BigDecimal {
        query::total(self.storage.all())
    }

    /// Per-category sums over every recorded expense
    pub fn totals_by_category(&self) -> CategoryTotals {
        query::totals_by_category(self.storage.all())
    }

    /// Overall summary of every recorded expense
    pub fn summary(&self) -> ExpenseSummary {
        query::summarize(self.storage.all())
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Borrow the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the tracker and return its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}
