//! Data source selection and metadata.

use std::fs::File;
use std::io::{self, Cursor, Read, Stdin};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CsvFillError, Result};
use crate::imputation::Instruction;

/// A readable byte stream that can report a failure when closed.
///
/// Dropping a stream releases it either way; `close` is the hook for
/// streams whose shutdown can fail. The default does nothing.
pub trait ReadStream: Read {
    /// Release the stream after reading.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ReadStream for File {}
impl ReadStream for Stdin {}
impl<T: AsRef<[u8]>> ReadStream for Cursor<T> {}

/// Kind of source a table was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Path,
    File,
    Stream,
}

/// One configured input.
pub enum Source {
    /// A file opened at parse time.
    Path(PathBuf),
    /// An already open file handle.
    File(File),
    /// Any other byte stream.
    Stream(Box<dyn ReadStream>),
}

impl Source {
    /// A path source. The path must exist now.
    pub fn path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CsvFillError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(Source::Path(path.to_path_buf()))
    }

    /// A file handle source. The file must still be reachable.
    pub fn file(file: File) -> Result<Self> {
        if file.metadata().is_err() {
            return Err(CsvFillError::SourceNotFound {
                path: PathBuf::from("<file handle>"),
            });
        }
        Ok(Source::File(file))
    }

    /// A stream source.
    pub fn stream(stream: impl ReadStream + 'static) -> Self {
        Source::Stream(Box::new(stream))
    }

    /// Which kind of source this is.
    pub fn kind(&self) -> SourceKind {
        match self {
            Source::Path(_) => SourceKind::Path,
            Source::File(_) => SourceKind::File,
            Source::Stream(_) => SourceKind::Stream,
        }
    }

    /// Path of a path source.
    pub fn location(&self) -> Option<&Path> {
        match self {
            Source::Path(path) => Some(path),
            _ => None,
        }
    }

    /// Open the stream to read lines from.
    pub(crate) fn open(self) -> Result<Box<dyn ReadStream>> {
        match self {
            Source::Path(path) => match File::open(&path) {
                Ok(file) => Ok(Box::new(file)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    Err(CsvFillError::SourceNotFound { path })
                }
                Err(e) => Err(CsvFillError::Read { source: e }),
            },
            Source::File(file) => Ok(Box::new(file)),
            Source::Stream(stream) => Ok(stream),
        }
    }
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Source::File(file) => f.debug_tuple("File").field(file).finish(),
            Source::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// Metadata about a parsed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Kind of source that was read.
    pub kind: SourceKind,
    /// Path, for path sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Whether the first row is a header.
    pub has_header: bool,
    /// Number of rows read, header included.
    pub row_count: usize,
    /// Widest row before imputation.
    pub max_row_len: usize,
    /// Rows shorter than the widest row before imputation.
    pub ragged_rows: usize,
    /// Rows that received an imputed value.
    pub imputed_rows: usize,
    /// Instruction used for imputation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<Instruction>,
    /// When parsing finished.
    pub parsed_at: DateTime<Utc>,
}
