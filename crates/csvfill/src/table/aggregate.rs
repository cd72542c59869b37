//! Row and column aggregates.
//!
//! Every scanned cell is classified and pushed into the bucket for its
//! numeric subtype. The reduction then runs over the first non-empty bucket
//! in priority order (integer, long, float, double); values in lower
//! buckets do not contribute. A scan with no numeric cells yields `"0"`.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Axis, CsvFillError, Result};
use crate::inference::{parse_cell, NumericValue};

use super::Table;

/// Aggregate operation applied to a row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    Sum,
    Average,
    Min,
    Max,
}

/// Per-subtype accumulation lists for a single aggregate call.
#[derive(Debug, Default)]
struct Buckets {
    integers: Vec<i32>,
    longs: Vec<i64>,
    floats: Vec<f32>,
    doubles: Vec<f64>,
}

impl Buckets {
    fn push(&mut self, value: NumericValue) {
        match value {
            NumericValue::Integer(v) => self.integers.push(v),
            NumericValue::Long(v) => self.longs.push(v),
            NumericValue::Float(v) => self.floats.push(v),
            NumericValue::Double(v) => self.doubles.push(v),
        }
    }

    fn reduce(&self, reduction: Reduction) -> String {
        if !self.integers.is_empty() {
            let values = &self.integers;
            return match reduction {
                Reduction::Sum => values.iter().map(|&v| i64::from(v)).sum::<i64>().to_string(),
                Reduction::Average => render_float(mean(values.iter().map(|&v| f64::from(v)))),
                Reduction::Min => values.iter().min().map(i32::to_string).unwrap_or_default(),
                Reduction::Max => values.iter().max().map(i32::to_string).unwrap_or_default(),
            };
        }

        if !self.longs.is_empty() {
            let values = &self.longs;
            return match reduction {
                Reduction::Sum => values.iter().map(|&v| i128::from(v)).sum::<i128>().to_string(),
                Reduction::Average => render_float(mean(values.iter().map(|&v| v as f64))),
                Reduction::Min => values.iter().min().map(i64::to_string).unwrap_or_default(),
                Reduction::Max => values.iter().max().map(i64::to_string).unwrap_or_default(),
            };
        }

        if !self.floats.is_empty() {
            let values = &self.floats;
            return match reduction {
                Reduction::Sum => render_float(values.iter().sum::<f32>()),
                Reduction::Average => render_float(mean(values.iter().map(|&v| f64::from(v)))),
                Reduction::Min => render_float(extreme(values, f32::total_cmp, Reduction::Min)),
                Reduction::Max => render_float(extreme(values, f32::total_cmp, Reduction::Max)),
            };
        }

        if !self.doubles.is_empty() {
            let values = &self.doubles;
            return match reduction {
                Reduction::Sum => render_float(values.iter().sum::<f64>()),
                Reduction::Average => render_float(mean(values.iter().copied())),
                Reduction::Min => render_float(extreme(values, f64::total_cmp, Reduction::Min)),
                Reduction::Max => render_float(extreme(values, f64::total_cmp, Reduction::Max)),
            };
        }

        "0".to_string()
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    values.sum::<f64>() / count as f64
}

/// Smallest or largest value under `cmp`, first occurrence on ties.
fn extreme<T: Copy>(
    values: &[T],
    cmp: fn(&T, &T) -> std::cmp::Ordering,
    reduction: Reduction,
) -> T {
    let mut sorted = values.to_vec();
    match reduction {
        Reduction::Max => sorted.sort_by(|a, b| cmp(b, a)),
        _ => sorted.sort_by(cmp),
    }
    sorted[0]
}

/// Floats keep a trailing `.0` when whole (`4.0`, not `4`).
fn render_float<T: Debug>(value: T) -> String {
    format!("{:?}", value)
}

impl Table {
    /// Sum of a row.
    pub fn row_sum(&self, row: usize) -> Result<String> {
        self.aggregate_row(row, Reduction::Sum)
    }

    /// Arithmetic mean of a row.
    pub fn row_average(&self, row: usize) -> Result<String> {
        self.aggregate_row(row, Reduction::Average)
    }

    /// Largest value in a row.
    pub fn row_max(&self, row: usize) -> Result<String> {
        self.aggregate_row(row, Reduction::Max)
    }

    /// Smallest value in a row.
    pub fn row_min(&self, row: usize) -> Result<String> {
        self.aggregate_row(row, Reduction::Min)
    }

    /// Sum of a column, header excluded.
    pub fn column_sum(&self, column: usize) -> Result<String> {
        self.aggregate_column(column, Reduction::Sum)
    }

    /// Arithmetic mean of a column, header excluded.
    pub fn column_average(&self, column: usize) -> Result<String> {
        self.aggregate_column(column, Reduction::Average)
    }

    /// Largest value in a column, header excluded.
    pub fn column_max(&self, column: usize) -> Result<String> {
        self.aggregate_column(column, Reduction::Max)
    }

    /// Smallest value in a column, header excluded.
    pub fn column_min(&self, column: usize) -> Result<String> {
        self.aggregate_column(column, Reduction::Min)
    }

    /// Reduce every cell of one row.
    ///
    /// The header flag only changes how many rows the table must hold before
    /// the scan: sum and average need more than one row when a header is
    /// present, min and max need more than one row when it is absent. The
    /// whole target row is scanned either way.
    pub fn aggregate_row(&self, row: usize, reduction: Reduction) -> Result<String> {
        if self.is_empty() {
            return Err(CsvFillError::EmptyTable);
        }

        let min_rows = match reduction {
            Reduction::Sum | Reduction::Average => usize::from(self.has_header()),
            Reduction::Min | Reduction::Max => usize::from(!self.has_header()),
        };
        if self.row_count() <= min_rows {
            return Err(CsvFillError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
            });
        }

        let cells = self.row(row).ok_or(CsvFillError::IndexOutOfRange {
            axis: Axis::Row,
            index: row,
        })?;

        let mut buckets = Buckets::default();
        for (column, cell) in cells.iter().enumerate() {
            buckets.push(numeric(row, column, cell)?);
        }

        let result = buckets.reduce(reduction);
        trace!(row, ?reduction, %result, "row aggregate");
        Ok(result)
    }

    /// Reduce one column over every data row.
    ///
    /// The header row is skipped when present. Rows too short to contain the
    /// column are skipped.
    pub fn aggregate_column(&self, column: usize, reduction: Reduction) -> Result<String> {
        if self.is_empty() {
            return Err(CsvFillError::EmptyTable);
        }

        if column >= self.max_row_len() {
            return Err(CsvFillError::IndexOutOfRange {
                axis: Axis::Column,
                index: column,
            });
        }

        let start = usize::from(self.has_header());
        let mut buckets = Buckets::default();
        for (row, cells) in self.rows().iter().enumerate().skip(start) {
            if let Some(cell) = cells.get(column) {
                buckets.push(numeric(row, column, cell)?);
            }
        }

        let result = buckets.reduce(reduction);
        trace!(column, ?reduction, %result, "column aggregate");
        Ok(result)
    }
}

fn numeric(row: usize, column: usize, cell: &str) -> Result<NumericValue> {
    parse_cell(cell).ok_or_else(|| CsvFillError::NonNumericCell {
        row,
        column,
        value: cell.trim().to_string(),
    })
}
