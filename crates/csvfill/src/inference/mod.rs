//! Cell type inference.

mod numeric;

pub use numeric::{classify, parse_cell, CellType, NumericValue};
