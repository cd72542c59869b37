//! Error types for the csvfill library.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which axis of a table an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Main error type for csvfill operations.
#[derive(Debug, Error)]
pub enum CsvFillError {
    /// Configured path or file does not exist.
    #[error("Source not found: '{path}'")]
    SourceNotFound { path: PathBuf },

    /// Error while reading lines from the source.
    #[error("Read error: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// Error while closing the source after reading.
    #[error("Close error: {source}")]
    Close {
        #[source]
        source: std::io::Error,
    },

    /// No source was configured to read from.
    #[error("No reader available to read from")]
    EmptyReader,

    /// An aggregate hit a cell that is not numeric.
    #[error("Row {row}, column {column}: value '{value}' is not numeric")]
    NonNumericCell {
        row: usize,
        column: usize,
        value: String,
    },

    /// Requested row or column is outside the table.
    #[error("No such {axis}: {index}")]
    IndexOutOfRange { axis: Axis, index: usize },

    /// Aggregate requested on a table without rows.
    #[error("Table is empty")]
    EmptyTable,

    /// Imputation instruction could not be understood.
    #[error("Invalid instruction: {0}")]
    InvalidInstruction(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for csvfill operations.
pub type Result<T> = std::result::Result<T, CsvFillError>;
