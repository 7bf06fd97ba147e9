//! Runtime settings for the expense tracker
//!
//! Nothing is persisted, so settings only come from command-line flags or
//! their environment variable fallbacks.

use crate::types::{ExpenseError, ExpenseResult};

/// Largest number of fractional digits an amount may be displayed with
pub const MAX_AMOUNT_PRECISION: u32 = 10;

/// Settings shared by the driver and the binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Fractional digits shown when rendering amounts
    pub amount_precision: u32,

    /// `tracing` filter directive, e.g. `warn` or `expense_tracker=debug`
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            amount_precision: 2,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    pub fn new(amount_precision: u32, log_filter: impl Into<String>) -> Self {
        Self {
            amount_precision,
            log_filter: log_filter.into(),
        }
    }

    /// Reject settings the driver cannot honor
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.amount_precision > MAX_AMOUNT_PRECISION {
            return Err(ExpenseError::Config(format!(
                "amount precision {} exceeds the maximum of {}",
                self.amount_precision, MAX_AMOUNT_PRECISION
            )));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ExpenseError::Config(
                "log filter cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.amount_precision, 2);
        assert_eq!(settings.log_filter, "warn");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_precision_out_of_range() {
        let settings = Settings::new(MAX_AMOUNT_PRECISION + 1, "warn");
        assert!(matches!(settings.validate(), Err(ExpenseError::Config(_))));
    }

    #[test]
    fn test_blank_log_filter() {
        let settings = Settings::new(2, "  ");
        assert!(matches!(settings.validate(), Err(ExpenseError::Config(_))));
    }
}
