//! Interactive menu loop
//!
//! The session reads one line per prompt from any `BufRead` and writes the
//! transcript to any `Write`, so it runs the same against a terminal or an
//! in-memory buffer. Malformed input is reported and the attempted operation
//! is dropped; the store is left untouched.

use std::io::{BufRead, Write};

use crate::cli::command::MenuCommand;
use crate::cli::render;
use crate::config::Settings;
use crate::tracker::ExpenseTracker;
use crate::traits::*;
use crate::types::*;
use crate::utils::{parse_amount, parse_date, MemoryStorage};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive run of the tracker
pub struct Session<R, W, S: ExpenseStorage = MemoryStorage> {
    input: R,
    output: W,
    tracker: ExpenseTracker<S>,
    settings: Settings,
}

impl<R: BufRead, W: Write> Session<R, W, MemoryStorage> {
    /// Create a session over a fresh in-memory store
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self::with_tracker(input, output, ExpenseTracker::in_memory(), settings)
    }
}

impl<R: BufRead, W: Write, S: ExpenseStorage> Session<R, W, S> {
    /// Create a session around an existing tracker
    pub fn with_tracker(input: R, output: W, tracker: ExpenseTracker<S>, settings: Settings) -> Self {
        Self {
            input,
            output,
            tracker,
            settings,
        }
    }

    pub fn tracker(&self) -> &ExpenseTracker<S> {
        &self.tracker
    }

    /// Consume the session, returning the tracker and the output sink
    pub fn into_parts(self) -> (ExpenseTracker<S>, W) {
        (self.tracker, self.output)
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> ExpenseResult<()> {
        tracing::info!("session started");

        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Enter choice: ")? else {
                break;
            };

            let command = match line.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!(error = %e, "rejected menu input");
                    writeln!(
                        self.output,
                        "Invalid choice. Please select a number between 1 and 6."
                    )?;
                    continue;
                }
            };

            if self.dispatch(command)? == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        tracing::info!(recorded = self.tracker.len(), "session ended");
        Ok(())
    }

    /// Run the handler for a single command
    pub fn dispatch(&mut self, command: MenuCommand) -> ExpenseResult<Flow> {
        tracing::debug!(?command, "dispatching menu command");
        match command {
            MenuCommand::AddExpense => self.add_expense(),
            MenuCommand::ViewAll => self.show(&ExpenseFilter::new()),
            MenuCommand::FilterByDateRange => self.filter_by_date_range(),
            MenuCommand::FilterByCategory => self.filter_by_category(),
            MenuCommand::Summary => self.summary(),
            MenuCommand::Exit => Ok(Flow::Exit),
        }
    }

    fn write_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nExpense Tracker Menu:")?;
        for command in MenuCommand::ALL {
            writeln!(self.output, "{}", command)?;
        }
        Ok(())
    }

    /// Print `text` and read one line, without its line terminator
    ///
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn add_expense(&mut self) -> ExpenseResult<Flow> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let date = match parse_date(&date) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(error = %e, "rejected expense");
                writeln!(self.output, "Invalid date format. Please use YYYY-MM-DD.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(Flow::Exit);
        };
        let amount = match parse_amount(&amount) {
            Ok(amount) => amount,
            Err(e) => {
                tracing::warn!(error = %e, "rejected expense");
                writeln!(self.output, "Invalid amount. Please enter a number.")?;
                return Ok(Flow::Continue);
            }
        };

        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(Flow::Exit);
        };

        self.tracker
            .add_expense(ExpenseRecord::new(date, amount, category, description));
        writeln!(self.output, "Expense added successfully.")?;
        Ok(Flow::Continue)
    }

    fn filter_by_date_range(&mut self) -> ExpenseResult<Flow> {
        let Some(start) = self.prompt("Enter start date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(end) = self.prompt("Enter end date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        match (parse_date(&start), parse_date(&end)) {
            (Ok(start), Ok(end)) => self.show(&ExpenseFilter::new().between(start, end)),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "rejected date range");
                writeln!(self.output, "Invalid date format.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn filter_by_category(&mut self) -> ExpenseResult<Flow> {
        let Some(category) = self.prompt("Enter category: ")? else {
            return Ok(Flow::Exit);
        };

        // An empty answer means "no category constraint".
        let filter = if category.is_empty() {
            ExpenseFilter::new()
        } else {
            ExpenseFilter::new().category(category)
        };
        self.show(&filter)
    }

    fn show(&mut self, filter: &ExpenseFilter) -> ExpenseResult<Flow> {
        let records = self.tracker.view(filter);
        render::write_expenses(&mut self.output, &records, self.settings.amount_precision)?;
        Ok(Flow::Continue)
    }

    fn summary(&mut self) -> ExpenseResult<Flow> {
        let summary = self.tracker.summary();
        render::write_summary(&mut self.output, &summary, self.settings.amount_precision)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (ExpenseTracker, String) {
        let mut session = Session::new(Cursor::new(input.to_string()), Vec::new(), Settings::default());
        session.run().unwrap();
        let (tracker, output) = session.into_parts();
        (tracker, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (tracker, output) = run_session("6\n");
        assert!(tracker.is_empty());
        assert!(output.contains("Expense Tracker Menu:"));
        assert!(output.contains("6. Exit"));
        assert_eq!(output.matches("Enter choice: ").count(), 1);
    }

    #[test]
    fn test_eof_ends_session() {
        let (tracker, output) = run_session("");
        assert!(tracker.is_empty());
        assert!(output.ends_with("Enter choice: "));
    }

    #[test]
    fn test_add_expense_keeps_text_fields_verbatim() {
        let (tracker, output) = run_session("1\n2024-01-01\n10.5\n Food \nLunch with team\r\n6\n");

        assert!(output.contains("Expense added successfully."));
        assert_eq!(tracker.len(), 1);
        let record = &tracker.expenses()[0];
        assert_eq!(record.category(), " Food ");
        assert_eq!(record.description(), "Lunch with team");
    }

    #[test]
    fn test_bad_date_aborts_before_amount_prompt() {
        let (tracker, output) = run_session("1\n2024/01/01\n6\n");

        assert!(tracker.is_empty());
        assert!(output.contains("Invalid date format. Please use YYYY-MM-DD."));
        assert!(!output.contains("Enter amount: "));
    }

    #[test]
    fn test_bad_amount_appends_nothing() {
        let (tracker, output) = run_session("1\n2024-01-01\nlots\n6\n");

        assert!(tracker.is_empty());
        assert!(output.contains("Invalid amount. Please enter a number."));
        assert!(!output.contains("Enter category: "));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let (_, output) = run_session("9\nabc\n6\n");
        assert_eq!(
            output
                .matches("Invalid choice. Please select a number between 1 and 6.")
                .count(),
            2
        );
    }

    #[test]
    fn test_empty_views() {
        let (_, output) = run_session("2\n5\n6\n");
        assert!(output.contains("No expenses found."));
        assert!(output.contains("No expenses to summarize."));
    }

    #[test]
    fn test_invalid_date_range() {
        let (_, output) = run_session("3\n2024-01-01\nsoon\n6\n");
        assert!(output.contains("Invalid date format.\n"));
    }

    #[test]
    fn test_invalid_start_date_with_valid_end() {
        let (_, output) = run_session("1\n2024-01-05\n3\nFood\nx\n3\nlast week\n2024-01-31\n6\n");
        assert!(output.contains("Invalid date format.\n"));
        assert!(!output.contains("\nExpenses:\n"));
    }

    #[test]
    fn test_eof_while_adding_discards_expense() {
        let partial_inputs = [
            "1\n2024-01-01\n",
            "1\n2024-01-01\n10\n",
            "1\n2024-01-01\n10\nFood\n",
        ];
        for input in partial_inputs {
            let (tracker, output) = run_session(input);
            assert!(tracker.is_empty());
            assert!(!output.contains("Expense added successfully."));
        }
    }

    #[test]
    fn test_eof_between_date_range_prompts() {
        let (tracker, output) = run_session("3\n2024-01-01\n");
        assert!(tracker.is_empty());
        assert!(output.ends_with("Enter end date (YYYY-MM-DD): "));
    }

    #[test]
    fn test_huge_exponent_amount_is_rejected() {
        let (tracker, output) = run_session("1\n2024-01-01\n1e400000000\n1\n2024-01-02\n0.01\nFood\nTea\n5\n6\n");

        assert!(output.contains("Invalid amount. Please enter a number."));
        assert_eq!(tracker.len(), 1);
        assert!(output.contains("Overall Total: 0.01"));
    }

    #[test]
    fn test_dispatch_exit() {
        let mut session = Session::new(Cursor::new(String::new()), Vec::new(), Settings::default());
        assert_eq!(session.dispatch(MenuCommand::Exit).unwrap(), Flow::Exit);
        assert_eq!(session.dispatch(MenuCommand::ViewAll).unwrap(), Flow::Continue);
    }
}
