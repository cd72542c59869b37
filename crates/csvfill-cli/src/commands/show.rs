//! Show command - parse a file and print the table.

use colored::Colorize;

use crate::cli::InputArgs;

pub fn run(input: InputArgs, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (table, metadata) = super::load(input)?;

    if json_output {
        let output = serde_json::json!({
            "source": metadata,
            "rows": table.rows(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", table);
    println!();
    println!(
        "{} rows, widest row {} cells",
        metadata.row_count.to_string().white().bold(),
        metadata.max_row_len.to_string().white().bold()
    );

    if metadata.ragged_rows > 0 {
        let line = format!(
            "{} ragged rows, {} filled",
            metadata.ragged_rows, metadata.imputed_rows
        );
        if metadata.imputed_rows < metadata.ragged_rows {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.green());
        }
    }

    if table.is_ragged() {
        println!("{}", "Table is still ragged".yellow());
    }

    Ok(())
}
