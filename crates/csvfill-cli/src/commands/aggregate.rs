//! Aggregate command - compute a row or column aggregate.

use crate::cli::{AggregateOp, InputArgs};

pub fn run(
    input: InputArgs,
    operation: AggregateOp,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let (table, _) = super::load(input)?;

    let value = if operation.is_row() {
        table.aggregate_row(index, operation.reduction())?
    } else {
        table.aggregate_column(index, operation.reduction())?
    };
    println!("{}", value);

    Ok(())
}
