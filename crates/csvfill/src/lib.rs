//! csvfill: comma-delimited tables with numeric aggregates and ragged-row filling.
//!
//! A [`Parser`] reads lines from a path, file handle, or stream until the
//! first blank line, splits each line on commas, and fills rows that are
//! shorter than the widest row using a single [`Instruction`]. The resulting
//! [`Table`] answers row and column sums, averages, minimums and maximums.
//!
//! # Numeric subtypes
//!
//! Each cell is classified as integer, long, float, or double (first parse
//! that succeeds wins). Aggregates only use the highest-priority subtype
//! present in the scanned range; other numeric cells are ignored.
//!
//! # Configuration
//!
//! Instruction keys are checked when the configuration is built, not when
//! the first ragged row is found. A placeholder mapping like `{"": ""}` is
//! rejected with [`CsvFillError::InvalidInstruction`]; use an empty mapping
//! (or no instruction) to turn imputation off.
//!
//! Lines end at `\n` or `\r\n`. A lone `\r` is not a line break and stays
//! inside the cell text.
//!
//! # Example
//!
//! ```no_run
//! use csvfill::{Instruction, Operation, Parser, ParserConfig};
//!
//! let config = ParserConfig::new()
//!     .with_header(true)
//!     .with_instruction(Instruction::new(1, Operation::ColumnAverage));
//!
//! let table = Parser::with_config(config)
//!     .with_path("weights.csv")?
//!     .parse()?;
//!
//! println!("{}", table.column_average(2)?);
//! # Ok::<(), csvfill::CsvFillError>(())
//! ```

pub mod error;
pub mod imputation;
pub mod inference;
pub mod input;
pub mod table;

pub use error::{Axis, CsvFillError, Result};
pub use imputation::{ImputationEngine, ImputationSummary, Instruction, Operation};
pub use inference::{classify, parse_cell, CellType, NumericValue};
pub use input::{Parser, ParserConfig, ReadStream, Source, SourceKind, SourceMetadata};
pub use table::{Reduction, Table};
