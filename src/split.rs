use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument};

use crate::error::{Result, SplitError};
use crate::io::csv_read;
use crate::io::excel_write;
use crate::orders::build_orders;

/// Computes the output directory path for a given sales directory and date.
pub fn orders_dir_for(sales_dir: &Path, date: NaiveDate) -> PathBuf {
    sales_dir.join(format!("Orders_{date}"))
}

/// Resolves the per-order output directory next to the sales CSV file and
/// creates it if it does not exist yet.
///
/// The directory name carries the current local calendar date, so re-running
/// the pipeline on the same day reuses the same directory.
#[instrument(level = "info", skip_all, fields(input = %sales_csv.display()))]
pub fn provision_orders_dir(sales_csv: &Path) -> Result<PathBuf> {
    let sales_csv = sales_csv.canonicalize()?;
    let sales_dir = sales_csv
        .parent()
        .ok_or_else(|| SplitError::InvalidCsvPath(sales_csv.clone()))?;
    let orders_dir = orders_dir_for(sales_dir, Local::now().date_naive());
    fs::create_dir_all(&orders_dir)?;
    info!(orders_dir = %orders_dir.display(), "orders directory provisioned");
    Ok(orders_dir)
}

/// Splits the sales CSV into per-order groups and writes one workbook per
/// order into the given directory.
///
/// Any failure aborts the whole run; there is no per-order recovery.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %sales_csv.display(), output = %orders_dir.display())
)]
pub fn split_sales(sales_csv: &Path, orders_dir: &Path) -> Result<()> {
    let records = csv_read::read_sales(sales_csv)?;
    info!(record_count = records.len(), "loaded sales records");

    let orders = build_orders(&records);
    debug!(order_count = orders.len(), "records grouped into orders");

    for order in &orders {
        let order_path = orders_dir.join(order.file_name());
        excel_write::write_order(&order_path, order)?;
        debug!(order_id = order.order_id, path = %order_path.display(), "order written");
    }

    info!(order_count = orders.len(), "all orders exported");
    Ok(())
}
