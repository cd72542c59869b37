//! Fills ragged rows using a single instruction.

use tracing::{debug, info};

use crate::error::Result;
use crate::table::Table;

use super::instruction::Instruction;

/// Outcome of one imputation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImputationSummary {
    /// Widest row length before the pass.
    pub max_row_len: usize,
    /// Rows shorter than `max_row_len` before the pass.
    pub ragged_rows: usize,
    /// Rows that received a value.
    pub imputed_rows: usize,
}

/// Inserts one value into every ragged row of a table.
///
/// A row missing several cells still gets a single value, so it may remain
/// ragged afterwards. Rows are processed in order against the table as
/// already modified by earlier rows.
#[derive(Debug, Clone, Default)]
pub struct ImputationEngine {
    instruction: Option<Instruction>,
}

impl ImputationEngine {
    /// Create an engine. `None` leaves every table unchanged.
    pub fn new(instruction: Option<Instruction>) -> Self {
        Self { instruction }
    }

    /// Run the pass in place.
    ///
    /// The first failing aggregate aborts the pass. Rows filled before the
    /// failure keep their inserted values.
    pub fn apply(&self, table: &mut Table) -> Result<ImputationSummary> {
        let max_row_len = table.max_row_len();
        let ragged: Vec<usize> = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() < max_row_len)
            .map(|(index, _)| index)
            .collect();

        let mut summary = ImputationSummary {
            max_row_len,
            ragged_rows: ragged.len(),
            imputed_rows: 0,
        };

        let Some(instruction) = &self.instruction else {
            debug!(ragged_rows = summary.ragged_rows, "no imputation instruction");
            return Ok(summary);
        };

        for row in ragged {
            let value = value_for(table, row, instruction)?;
            debug!(row, column = instruction.column, %value, "imputing cell");
            table.insert_cell(row, instruction.column, value)?;
            summary.imputed_rows += 1;
        }

        info!(
            operation = %instruction.operation,
            column = instruction.column,
            imputed_rows = summary.imputed_rows,
            "imputation complete"
        );
        Ok(summary)
    }
}

fn value_for(table: &Table, row: usize, instruction: &Instruction) -> Result<String> {
    let operation = &instruction.operation;
    match operation.reduction() {
        Some(reduction) if operation.is_row_scoped() => table.aggregate_row(row, reduction),
        Some(reduction) => table.aggregate_column(instruction.column, reduction),
        // Constants are inserted verbatim
        None => Ok(operation.code().to_string()),
    }
}
