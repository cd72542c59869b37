//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use csvfill::{Instruction, Reduction};

/// csvfill: comma-delimited tables with aggregates and ragged-row filling
#[derive(Parser)]
#[command(name = "csvfill")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Source and parse options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the data file, or '-' for standard input
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat the first row as a header
    #[arg(long)]
    pub header: bool,

    /// Fill ragged rows: COLUMN=CODE (ROW_AW, COL_AW, ROW_MAX, COL_MAX,
    /// ROW_MIN, COL_MIN, or a constant)
    #[arg(short, long, value_name = "COLUMN=CODE", value_parser = parse_instruction)]
    pub fill: Option<Instruction>,
}

fn parse_instruction(s: &str) -> Result<Instruction, String> {
    s.parse().map_err(|e: csvfill::CsvFillError| e.to_string())
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a file and print the resulting table
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// Print table and source metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a single trimmed cell
    Get {
        #[command(flatten)]
        input: InputArgs,

        /// Row index (0-based, header included)
        row: usize,

        /// Column index (0-based)
        column: usize,
    },

    /// Compute a row or column aggregate
    Aggregate {
        #[command(flatten)]
        input: InputArgs,

        /// Aggregate to compute
        #[arg(value_enum)]
        operation: AggregateOp,

        /// Row or column index (0-based)
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AggregateOp {
    RowSum,
    RowAverage,
    RowMax,
    RowMin,
    ColumnSum,
    ColumnAverage,
    ColumnMax,
    ColumnMin,
}

impl AggregateOp {
    /// Whether the index names a row.
    pub fn is_row(&self) -> bool {
        matches!(
            self,
            AggregateOp::RowSum | AggregateOp::RowAverage | AggregateOp::RowMax | AggregateOp::RowMin
        )
    }

    pub fn reduction(&self) -> Reduction {
        match self {
            AggregateOp::RowSum | AggregateOp::ColumnSum => Reduction::Sum,
            AggregateOp::RowAverage | AggregateOp::ColumnAverage => Reduction::Average,
            AggregateOp::RowMax | AggregateOp::ColumnMax => Reduction::Max,
            AggregateOp::RowMin | AggregateOp::ColumnMin => Reduction::Min,
        }
    }
}
