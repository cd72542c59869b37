//! Table of raw cell strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, CsvFillError, Result};

/// Parsed tabular data.
///
/// Rows keep their cells exactly as tokenized (untrimmed) and may differ in
/// length. Cells are trimmed when read through [`Table::get`] or classified
/// by an aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Row data as raw strings (row-major order).
    rows: Vec<Vec<String>>,
    /// Whether the first row is a header.
    has_header: bool,
}

impl Table {
    /// Create a new table.
    pub fn new(rows: Vec<Vec<String>>, has_header: bool) -> Self {
        Self { rows, has_header }
    }

    /// Whether the first row is treated as a header.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the widest row (0 for an empty table).
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns true if any row is shorter than the widest one.
    pub fn is_ragged(&self) -> bool {
        let width = self.max_row_len();
        self.rows.iter().any(|row| row.len() < width)
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single row by index.
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get a specific cell value, trimmed.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.trim())
    }

    /// Insert a cell into a row, shifting later cells right.
    pub(crate) fn insert_cell(&mut self, row: usize, col: usize, value: String) -> Result<()> {
        let cells = self.rows.get_mut(row).ok_or(CsvFillError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
        })?;

        if col > cells.len() {
            return Err(CsvFillError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
            });
        }

        cells.insert(col, value);
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "[{}]", row.join(", "))?;
        }
        f.write_str("]")
    }
}
