//! Input parsing and data source handling.

mod parser;
mod source;
mod tokenizer;

pub use parser::{Parser, ParserConfig};
pub use source::{ReadStream, Source, SourceKind, SourceMetadata};
pub use tokenizer::{read_rows, tokenize_line};
