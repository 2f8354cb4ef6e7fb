//! Error types for file-based record sources.

use thiserror::Error;

/// A specialized Result type for file readers.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading record files.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer rejected the file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row inside the body of the file was unusable.
    #[error("Malformed row {line}: {reason}")]
    MalformedRow {
        /// 1-based row number within the file.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

impl FileError {
    /// Creates a malformed row error.
    #[must_use]
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
