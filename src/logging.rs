//! Tracing subscriber setup for the binary

use tracing_subscriber::EnvFilter;

use crate::types::{ExpenseError, ExpenseResult};

/// Install a global subscriber that writes to stderr
///
/// Stdout carries the interactive transcript, so log lines never go there.
pub fn init(filter: &str) -> ExpenseResult<()> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| ExpenseError::Config(format!("invalid log filter '{}': {}", filter, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("failed to install logger: {}", e)))
}
