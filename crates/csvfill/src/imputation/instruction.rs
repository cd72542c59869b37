//! Imputation instruction: which column to fill and how.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CsvFillError, Result};
use crate::table::Reduction;

/// How the value for a missing cell is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Operation {
    /// Average of the ragged row itself (`ROW_AW`).
    RowAverage,
    /// Average of the target column (`COL_AW`).
    ColumnAverage,
    /// `ROW_MAX`.
    RowMax,
    /// `COL_MAX`.
    ColumnMax,
    /// `ROW_MIN`.
    RowMin,
    /// `COL_MIN`.
    ColumnMin,
    /// Any other code, inserted verbatim.
    Constant(String),
}

impl Operation {
    /// Parse an operation code. Unrecognized codes become constants.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ROW_AW" => Operation::RowAverage,
            "COL_AW" => Operation::ColumnAverage,
            "ROW_MAX" => Operation::RowMax,
            "COL_MAX" => Operation::ColumnMax,
            "ROW_MIN" => Operation::RowMin,
            "COL_MIN" => Operation::ColumnMin,
            other => Operation::Constant(other.to_string()),
        }
    }

    /// The code this operation is spelled with in configuration.
    pub fn code(&self) -> &str {
        match self {
            Operation::RowAverage => "ROW_AW",
            Operation::ColumnAverage => "COL_AW",
            Operation::RowMax => "ROW_MAX",
            Operation::ColumnMax => "COL_MAX",
            Operation::RowMin => "ROW_MIN",
            Operation::ColumnMin => "COL_MIN",
            Operation::Constant(value) => value.as_str(),
        }
    }

    /// The aggregate behind this operation, if any.
    pub(crate) fn reduction(&self) -> Option<Reduction> {
        match self {
            Operation::RowAverage | Operation::ColumnAverage => Some(Reduction::Average),
            Operation::RowMax | Operation::ColumnMax => Some(Reduction::Max),
            Operation::RowMin | Operation::ColumnMin => Some(Reduction::Min),
            Operation::Constant(_) => None,
        }
    }

    /// Whether the aggregate runs over the ragged row (vs. the target column).
    pub(crate) fn is_row_scoped(&self) -> bool {
        matches!(
            self,
            Operation::RowAverage | Operation::RowMax | Operation::RowMin
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single imputation instruction.
///
/// Every ragged row receives one value at `column`, computed by `operation`.
/// There is only ever one instruction per parse; it applies to all ragged
/// rows regardless of which cells they are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Index the value is inserted at.
    pub column: usize,
    /// How the value is computed.
    pub operation: Operation,
}

impl Instruction {
    /// Create an instruction.
    pub fn new(column: usize, operation: Operation) -> Self {
        Self { column, operation }
    }

    /// Build from a column key and an operation code.
    pub fn parse(column: &str, code: &str) -> Result<Self> {
        let index = column.trim().parse::<usize>().map_err(|_| {
            CsvFillError::InvalidInstruction(format!(
                "column key '{}' is not a non-negative integer",
                column
            ))
        })?;
        Ok(Self::new(index, Operation::from_code(code)))
    }

    /// Build from an ordered key/code mapping.
    ///
    /// Only the first entry is consulted; an empty mapping gives `None`.
    /// The key is validated here, even if no row ends up ragged, so a
    /// placeholder entry such as `("", "")` is an error rather than a no-op.
    pub fn from_map<I, K, V>(entries: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        entries
            .into_iter()
            .next()
            .map(|(key, code)| Self::parse(key.as_ref(), code.as_ref()))
            .transpose()
    }
}

impl FromStr for Instruction {
    type Err = CsvFillError;

    /// Parse `COLUMN=CODE`, e.g. `1=COL_AW` or `2=0`.
    fn from_str(s: &str) -> Result<Self> {
        let (column, code) = s.split_once('=').ok_or_else(|| {
            CsvFillError::InvalidInstruction(format!("expected COLUMN=CODE, got '{}'", s))
        })?;
        Self::parse(column, code)
    }
}
