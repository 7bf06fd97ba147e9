//! In-memory storage implementation

use crate::traits::*;
use crate::types::*;

/// In-memory, append-only expense store
///
/// Lives for one run of the program; nothing is written anywhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Vec<ExpenseRecord>,
}

impl MemoryStorage {
    /// Create an empty memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage instance pre-filled with `records`, keeping their order
    pub fn with_records(records: impl IntoIterator<Item = ExpenseRecord>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }
}

impl ExpenseStorage for MemoryStorage {
    fn append(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }
}

impl Extend<ExpenseRecord> for MemoryStorage {
    fn extend<T: IntoIterator<Item = ExpenseRecord>>(&mut self, iter: T) {
        for record in iter {
            self.append(record);
        }
    }
}
