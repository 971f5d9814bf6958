//! Error types for table rendering.

use std::io;

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for table operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested border style is not registered.
    #[error("unknown table style: {name}")]
    UnknownStyle { name: String },
    /// A row does not have as many cells as the table has columns.
    #[error("row {row} has {found} cells but the table has {expected} columns")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Colour annotation that could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// The pager program exited unsuccessfully.
    #[error("pager `{command}` exited with {status}")]
    Pager { command: String, status: String },
    /// I/O error while writing to the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Error from the delimited-text serializer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
