//! Menu commands accepted by the interactive driver

use std::fmt;
use std::str::FromStr;

use crate::types::ExpenseError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    AddExpense,
    ViewAll,
    FilterByDateRange,
    FilterByCategory,
    Summary,
    Exit,
}

impl MenuCommand {
    /// Every command, in menu order
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::AddExpense,
        MenuCommand::ViewAll,
        MenuCommand::FilterByDateRange,
        MenuCommand::FilterByCategory,
        MenuCommand::Summary,
        MenuCommand::Exit,
    ];

    /// Number the user types to pick this command
    pub fn key(self) -> u8 {
        match self {
            MenuCommand::AddExpense => 1,
            MenuCommand::ViewAll => 2,
            MenuCommand::FilterByDateRange => 3,
            MenuCommand::FilterByCategory => 4,
            MenuCommand::Summary => 5,
            MenuCommand::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::AddExpense => "Add Expense",
            MenuCommand::ViewAll => "View All Expenses",
            MenuCommand::FilterByDateRange => "Filter Expenses by Date Range",
            MenuCommand::FilterByCategory => "Filter Expenses by Category",
            MenuCommand::Summary => "View Summary",
            MenuCommand::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

impl FromStr for MenuCommand {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        MenuCommand::ALL
            .into_iter()
            .find(|command| choice == command.key().to_string())
            .ok_or_else(|| ExpenseError::InvalidChoice(choice.to_string()))
    }
}
