//! Utility modules for the expense tracker

pub mod memory_storage;
pub mod validation;

pub use memory_storage::*;
pub use validation::*;
