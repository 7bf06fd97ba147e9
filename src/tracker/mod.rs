//! Tracker module containing the session object and query engine

pub mod core;
pub mod query;

pub use self::core::*;
pub use self::query::{filter, summarize, total, totals_by_category};
