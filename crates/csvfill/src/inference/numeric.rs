//! Numeric subtype detection for raw cell text.
//!
//! A cell is trimmed and then tried against each numeric width in priority
//! order: 32-bit integer, 64-bit integer, single precision, double precision.
//! The first successful parse decides the subtype. Anything else is text.

use serde::{Deserialize, Serialize};

/// Inferred type of a single cell.
///
/// The variant order is the aggregation priority: earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    /// Fits in `i32`.
    Integer,
    /// Fits in `i64` but not `i32`.
    Long,
    /// Parses as `f32`.
    Float,
    /// Parses as `f64` only.
    Double,
    /// Not numeric.
    String,
}

/// A parsed numeric cell, tagged with its subtype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl NumericValue {
    /// The subtype this value was classified as.
    pub fn cell_type(&self) -> CellType {
        match self {
            NumericValue::Integer(_) => CellType::Integer,
            NumericValue::Long(_) => CellType::Long,
            NumericValue::Float(_) => CellType::Float,
            NumericValue::Double(_) => CellType::Double,
        }
    }
}

/// Parse a cell into the highest-priority numeric subtype it fits.
///
/// Returns `None` when the trimmed cell is not a number.
pub fn parse_cell(cell: &str) -> Option<NumericValue> {
    let text = cell.trim();

    text.parse::<i32>()
        .ok()
        .map(NumericValue::Integer)
        .or_else(|| text.parse::<i64>().ok().map(NumericValue::Long))
        .or_else(|| text.parse::<f32>().ok().map(NumericValue::Float))
        .or_else(|| text.parse::<f64>().ok().map(NumericValue::Double))
}

/// Classify a cell without keeping the parsed value.
pub fn classify(cell: &str) -> CellType {
    parse_cell(cell)
        .map(|value| value.cell_type())
        .unwrap_or(CellType::String)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer() {
        assert_eq!(classify("42"), CellType::Integer);
        assert_eq!(classify("-7"), CellType::Integer);
        assert_eq!(classify("+7"), CellType::Integer);
        assert_eq!(classify("  3 "), CellType::Integer);
        assert_eq!(classify("2147483647"), CellType::Integer);
    }

    #[test]
    fn test_classify_long() {
        assert_eq!(classify("2147483648"), CellType::Long);
        assert_eq!(classify("-9223372036854775808"), CellType::Long);
    }

    #[test]
    fn test_classify_float() {
        assert_eq!(classify("2.5"), CellType::Float);
        assert_eq!(classify("1e10"), CellType::Float);
        assert_eq!(classify("-.5"), CellType::Float);
        // Too wide for i64, still a float
        assert_eq!(classify("9223372036854775808"), CellType::Float);
    }

    #[test]
    fn test_classify_string() {
        assert_eq!(classify(""), CellType::String);
        assert_eq!(classify("abc"), CellType::String);
        assert_eq!(classify("1,000"), CellType::String);
        assert_eq!(classify("1 000"), CellType::String);
        assert_eq!(classify("x1"), CellType::String);
    }

    #[test]
    fn test_parse_cell_values() {
        assert_eq!(parse_cell(" 3 "), Some(NumericValue::Integer(3)));
        assert_eq!(parse_cell("5000000000"), Some(NumericValue::Long(5_000_000_000)));
        assert_eq!(parse_cell("2.5"), Some(NumericValue::Float(2.5)));
        assert_eq!(parse_cell("n/a"), None);
    }

    #[test]
    fn test_priority_order() {
        assert!(CellType::Integer < CellType::Long);
        assert!(CellType::Long < CellType::Float);
        assert!(CellType::Float < CellType::Double);
        assert!(CellType::Double < CellType::String);
    }
}
