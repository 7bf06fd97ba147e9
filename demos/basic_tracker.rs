//! Basic expense tracker usage example

use expense_tracker::cli::render::{format_amount, format_record};
use expense_tracker::utils::parse_record;
use expense_tracker::{ExpenseFilter, ExpenseTracker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Expense Tracker - Basic Example\n");

    let mut tracker = ExpenseTracker::in_memory();

    // 1. Record a few expenses from raw text, the way the menu driver does
    let raw = [
        ("2024-01-01", "10.00", "Food", "Groceries"),
        ("2024-01-15", "5.00", "food", "Snack"),
        ("2024-02-01", "20.00", "Transport", "Bus pass"),
        ("2024-02-03", "12.75", "Books", "Rust in Action"),
    ];
    for (date, amount, category, description) in raw {
        tracker.add_expense(parse_record(date, amount, category, description)?);
    }
    println!("Recorded {} expenses\n", tracker.len());

    // 2. Rejected input never reaches the store
    if let Err(e) = parse_record("2024-02-30", "1", "Food", "Impossible date") {
        println!("Rejected: {}\n", e);
    }

    // 3. Case-insensitive category filter
    println!("Category 'FOOD':");
    for record in tracker.view(&ExpenseFilter::new().category("FOOD")) {
        println!("  {}", format_record(record, 2));
    }
    println!();

    // 4. Inclusive date range
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).ok_or("bad date")?;
    let end = chrono::NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad date")?;
    println!("Between {} and {}:", start, end);
    for record in tracker.view(&ExpenseFilter::new().between(start, end)) {
        println!("  {}", format_record(record, 2));
    }
    println!();

    // 5. Aggregates; category keys keep their original casing
    let summary = tracker.summary();
    println!("Overall total: {}", format_amount(&summary.total, 2));
    for (category, amount) in &summary.by_category {
        println!("  {}: {}", category, format_amount(amount, 2));
    }

    Ok(())
}
