//! Traits for storage abstraction

use crate::types::*;

/// Storage abstraction for recorded expenses
///
/// A store is an ordered, append-only sequence. It performs no validation of
/// its own: callers hand it records that were fully parsed beforehand, and it
/// never rejects one.
pub trait ExpenseStorage {
    /// Append a record to the end of the sequence
    fn append(&mut self, record: ExpenseRecord);

    /// Read-only view of every record, in insertion order
    fn all(&self) -> &[ExpenseRecord];

    /// Number of stored records
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether nothing has been recorded yet
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
