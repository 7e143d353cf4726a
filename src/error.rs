use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Error type covering the different failure cases that can occur when the
/// tool ingests, transforms, or emits sales data.
#[derive(Debug, Error)]
pub enum SplitError {
    /// Wrapper for IO failures such as creating the output directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the sales CSV cannot be parsed or deserialized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the Excel writer implementation.
    #[error("Excel write error: {0}")]
    ExcelWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Raised when the CLI is invoked without a positional path argument.
    #[error("Missing path to sales data CSV file")]
    MissingCsvPath,

    /// Raised when the supplied path is not an existing regular file.
    #[error("invalid path: {}", .0.display())]
    InvalidCsvPath(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
