use std::path::PathBuf;

use clap::Parser;
use order_splitter::split;
use order_splitter::{Result, SplitError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    let sales_csv = cli.sales_csv.ok_or(SplitError::MissingCsvPath)?;
    if !sales_csv.is_file() {
        return Err(SplitError::InvalidCsvPath(sales_csv));
    }

    let orders_dir = split::provision_orders_dir(&sales_csv)?;
    split::split_sales(&sales_csv, &orders_dir)
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| SplitError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Split a flat sales ledger CSV into one Excel workbook per order."
)]
struct Cli {
    /// Path to the sales data CSV file.
    sales_csv: Option<PathBuf>,
}
