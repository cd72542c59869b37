//! Reads a source into a table and fills ragged rows.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{CsvFillError, Result};
use crate::imputation::{ImputationEngine, Instruction};
use crate::table::Table;

use super::source::{ReadStream, Source, SourceMetadata};
use super::tokenizer::read_rows;

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Whether the first row is a header.
    pub has_header: bool,
    /// How to fill ragged rows (None = leave them).
    pub instruction: Option<Instruction>,
}

impl ParserConfig {
    /// Create a configuration with no header and no instruction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header flag.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the imputation instruction.
    pub fn with_instruction(mut self, instruction: Instruction) -> Self {
        self.instruction = Some(instruction);
        self
    }

    /// Set the instruction from a key/code mapping. Only the first entry counts.
    ///
    /// The key must be a column index even when the table turns out not to
    /// be ragged; pass an empty mapping to disable imputation.
    pub fn with_instruction_map<I, K, V>(mut self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.instruction = Instruction::from_map(entries)?;
        Ok(self)
    }
}

/// Parses comma-delimited text from one source.
///
/// Sources are checked when they are set. If more than one is set, a path
/// wins over a file handle, which wins over a stream.
#[derive(Debug, Default)]
pub struct Parser {
    config: ParserConfig,
    path: Option<Source>,
    file: Option<Source>,
    stream: Option<Source>,
}

impl Parser {
    /// Create a parser with default configuration and no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Read from a path. Fails now if the path does not exist.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.path = Some(Source::path(path)?);
        Ok(self)
    }

    /// Read from an open file handle.
    pub fn with_file(mut self, file: File) -> Result<Self> {
        self.file = Some(Source::file(file)?);
        Ok(self)
    }

    /// Read from a byte stream.
    pub fn with_stream(mut self, stream: impl ReadStream + 'static) -> Self {
        self.stream = Some(Source::stream(stream));
        self
    }

    /// Parse the configured source into a table.
    pub fn parse(self) -> Result<Table> {
        self.parse_with_metadata().map(|(table, _)| table)
    }

    /// Parse the configured source and report what happened.
    pub fn parse_with_metadata(self) -> Result<(Table, SourceMetadata)> {
        let Parser {
            config,
            path,
            file,
            stream,
        } = self;

        let source = path.or(file).or(stream).ok_or(CsvFillError::EmptyReader)?;
        let kind = source.kind();
        let location = source.location().map(Path::to_path_buf);
        debug!(?kind, path = ?location, "opening source");

        let rows = read_and_close(source.open()?)?;
        debug!(rows = rows.len(), "tokenized source");

        let mut table = Table::new(rows, config.has_header);
        let engine = ImputationEngine::new(config.instruction.clone());
        let summary = engine.apply(&mut table)?;

        let metadata = SourceMetadata {
            kind,
            path: location,
            has_header: config.has_header,
            row_count: table.row_count(),
            max_row_len: summary.max_row_len,
            ragged_rows: summary.ragged_rows,
            imputed_rows: summary.imputed_rows,
            instruction: config.instruction,
            parsed_at: Utc::now(),
        };

        Ok((table, metadata))
    }
}

/// Tokenize the whole stream, then close it whatever the outcome.
fn read_and_close(mut stream: Box<dyn ReadStream>) -> Result<Vec<Vec<String>>> {
    let read = read_rows(BufReader::new(&mut stream));
    let closed = stream.close();

    match (read, closed) {
        (Ok(rows), Ok(())) => Ok(rows),
        (Ok(_), Err(e)) => Err(CsvFillError::Close { source: e }),
        (Err(e), Ok(())) => Err(CsvFillError::Read { source: e }),
        (Err(e), Err(close)) => {
            warn!(error = %close, "close failed after read error");
            Err(CsvFillError::Read { source: e })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read, Write};
    use tempfile::NamedTempFile;

    use crate::imputation::Operation;
    use crate::input::SourceKind;

    /// Stream whose reads and closes can be made to fail.
    struct FlakyStream {
        inner: Cursor<&'static str>,
        fail_read: bool,
        fail_close: bool,
    }

    impl Read for FlakyStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.fail_read {
                return Err(io::Error::other("read failed"));
            }
            self.inner.read(buf)
        }
    }

    impl ReadStream for FlakyStream {
        fn close(&mut self) -> io::Result<()> {
            if self.fail_close {
                return Err(io::Error::other("close failed"));
            }
            Ok(())
        }
    }

    fn flaky(fail_read: bool, fail_close: bool) -> FlakyStream {
        FlakyStream {
            inner: Cursor::new("1,2\n3,4\n"),
            fail_read,
            fail_close,
        }
    }

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_stream() {
        let table = Parser::new()
            .with_stream(Cursor::new("1,2,3\n4,5\n\n6,7,8"))
            .parse()
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(1).unwrap(), &["4", "5"]);
    }

    #[test]
    fn test_parse_with_instruction() {
        let config = ParserConfig::new()
            .with_instruction(Instruction::new(1, Operation::ColumnAverage));
        let (table, metadata) = Parser::with_config(config)
            .with_stream(Cursor::new("1,2\n3,4,5\n"))
            .parse_with_metadata()
            .unwrap();

        assert_eq!(table.row(0).unwrap(), &["1", "3.0", "2"]);
        assert_eq!(metadata.kind, SourceKind::Stream);
        assert_eq!(metadata.ragged_rows, 1);
        assert_eq!(metadata.imputed_rows, 1);
        assert_eq!(metadata.max_row_len, 3);
    }

    #[test]
    fn test_no_source() {
        assert!(matches!(Parser::new().parse(), Err(CsvFillError::EmptyReader)));
    }

    #[test]
    fn test_missing_path_fails_eagerly() {
        let result = Parser::new().with_path("/no/such/table.csv");
        assert!(matches!(result, Err(CsvFillError::SourceNotFound { .. })));
    }

    #[test]
    fn test_path_wins_over_stream() {
        let file = create_test_file("9,9\n");
        let (table, metadata) = Parser::new()
            .with_stream(Cursor::new("1,1\n"))
            .with_path(file.path())
            .unwrap()
            .parse_with_metadata()
            .unwrap();

        assert_eq!(table.get(0, 0), Some("9"));
        assert_eq!(metadata.kind, SourceKind::Path);
        assert_eq!(metadata.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_file_wins_over_stream() {
        let file = create_test_file("7,8\n");
        let handle = File::open(file.path()).unwrap();
        let (table, metadata) = Parser::new()
            .with_stream(Cursor::new("1,1\n"))
            .with_file(handle)
            .unwrap()
            .parse_with_metadata()
            .unwrap();

        assert_eq!(table.get(0, 1), Some("8"));
        assert_eq!(metadata.kind, SourceKind::File);
    }

    #[test]
    fn test_close_failure_is_distinct() {
        let result = Parser::new().with_stream(flaky(false, true)).parse();
        assert!(matches!(result, Err(CsvFillError::Close { .. })));
    }

    #[test]
    fn test_read_failure_wins_over_close_failure() {
        let result = Parser::new().with_stream(flaky(true, true)).parse();
        assert!(matches!(result, Err(CsvFillError::Read { .. })));

        let result = Parser::new().with_stream(flaky(true, false)).parse();
        assert!(matches!(result, Err(CsvFillError::Read { .. })));
    }

    #[test]
    fn test_empty_source() {
        let table = Parser::new().with_stream(Cursor::new("")).parse().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_instruction_map_config() {
        let config = ParserConfig::new()
            .with_header(true)
            .with_instruction_map([("0", "n/a"), ("1", "COL_AW")])
            .unwrap();

        assert!(config.has_header);
        assert_eq!(
            config.instruction,
            Some(Instruction::new(0, Operation::Constant("n/a".to_string())))
        );
    }
}
