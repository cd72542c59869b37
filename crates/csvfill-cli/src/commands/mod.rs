//! CLI command implementations.

pub mod aggregate;
pub mod get;
pub mod show;

use csvfill::{Parser, ParserConfig, SourceMetadata, Table};

use crate::cli::InputArgs;

/// Parse the input described by the shared arguments.
pub fn load(input: InputArgs) -> csvfill::Result<(Table, SourceMetadata)> {
    let mut config = ParserConfig::new().with_header(input.header);
    if let Some(instruction) = input.fill {
        config = config.with_instruction(instruction);
    }

    let parser = Parser::with_config(config);
    let parser = if input.file.as_os_str() == "-" {
        parser.with_stream(std::io::stdin())
    } else {
        parser.with_path(&input.file)?
    };

    parser.parse_with_metadata()
}
