//! Get command - print a single cell.

use crate::cli::InputArgs;

pub fn run(input: InputArgs, row: usize, column: usize) -> Result<(), Box<dyn std::error::Error>> {
    let (table, _) = super::load(input)?;

    let value = table
        .get(row, column)
        .ok_or_else(|| format!("No cell at row {}, column {}", row, column))?;
    println!("{}", value);

    Ok(())
}
