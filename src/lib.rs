//! # Expense Tracker
//!
//! A small library for recording expenses in memory, narrowing them by date
//! range or category, and computing totals, plus the interactive menu driver
//! used by the `expense-tracker` binary.
//!
//! ## Features
//!
//! - **Append-only store**: records keep their insertion order for the whole run
//! - **Filtering**: inclusive date bounds and case-insensitive category matching
//! - **Aggregates**: overall total and per-category totals (exact-case keys)
//! - **Driver**: a line-oriented menu that validates raw text before anything is stored
//!
//! ## Quick Start
//!
//! ```rust
//! use expense_tracker::{ExpenseFilter, ExpenseRecord, ExpenseTracker};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let mut tracker = ExpenseTracker::in_memory();
//! tracker.add_expense(ExpenseRecord::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     BigDecimal::from(10),
//!     "Food",
//!     "Groceries",
//! ));
//!
//! let food = tracker.view(&ExpenseFilter::new().category("FOOD"));
//! assert_eq!(food.len(), 1);
//! assert_eq!(tracker.total(), BigDecimal::from(10));
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod tracker;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use tracker::*;
pub use traits::*;
pub use types::*;
