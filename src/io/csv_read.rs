use std::path::Path;

use crate::error::Result;
use crate::model::SaleRecord;

/// Reads the entire sales CSV into memory as typed records.
///
/// The file must carry a header row; fields are matched by header name, so
/// column order does not matter and unused columns are ignored. A missing
/// required column or a malformed numeric field fails the whole load.
pub fn read_sales(path: &Path) -> Result<Vec<SaleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: SaleRecord = row?;
        records.push(record);
    }
    Ok(records)
}
