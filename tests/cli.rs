//! End-to-end tests of the expense-tracker binary

use assert_cmd::Command;
use predicates::prelude::*;

fn tracker() -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_LOG")
        .env_remove("EXPENSE_TRACKER_PRECISION");
    cmd
}

#[test]
fn test_menu_then_exit() {
    tracker()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Menu:"))
        .stdout(predicate::str::contains("1. Add Expense"))
        .stdout(predicate::str::contains("5. View Summary"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    tracker()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Enter choice: "));
}

#[test]
fn test_add_and_summarize() {
    tracker()
        .write_stdin("1\n2024-01-01\n10\nFood\nLunch\n1\n2024-01-02\n2.5\nfood\nTea\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall Total: 12.50"))
        .stdout(predicate::str::contains("Food: 10.00"))
        .stdout(predicate::str::contains("food: 2.50"));
}

#[test]
fn test_precision_flag() {
    tracker()
        .args(["--precision", "0"])
        .write_stdin("1\n2024-01-01\n10.4\nFood\nLunch\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount: 10,"));
}

#[test]
fn test_precision_from_environment() {
    tracker()
        .env("EXPENSE_TRACKER_PRECISION", "3")
        .write_stdin("1\n2024-01-01\n1\nFood\nLunch\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount: 1.000,"));
}

#[test]
fn test_precision_out_of_range_fails() {
    tracker()
        .args(["--precision", "11"])
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount precision"));
}

#[test]
fn test_invalid_input_is_reported_on_stdout_and_logged_on_stderr() {
    tracker()
        .write_stdin("1\nyesterday\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid date format. Please use YYYY-MM-DD.",
        ))
        .stderr(predicate::str::contains("rejected expense"));
}
