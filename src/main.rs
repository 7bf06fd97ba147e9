use std::io;

use anyhow::Result;
use clap::Parser;

use expense_tracker::cli::Session;
use expense_tracker::{logging, Settings};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Interactive expense tracker",
    long_about = "Record expenses for the current session, list them by date range \
                  or category, and view overall and per-category totals. Nothing is \
                  saved when the program exits."
)]
struct Cli {
    /// Log filter directive (logs go to stderr)
    #[arg(long, env = "EXPENSE_TRACKER_LOG", default_value = "warn")]
    log_level: String,

    /// Fractional digits used when displaying amounts
    #[arg(long, env = "EXPENSE_TRACKER_PRECISION", default_value_t = 2)]
    precision: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::new(cli.precision, cli.log_level);
    settings.validate()?;
    logging::init(&settings.log_filter)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), settings);
    session.run()?;

    Ok(())
}
