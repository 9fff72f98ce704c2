//! Error types for CSV decoding sessions.

use thiserror::Error;

/// Errors that can occur while reading and decoding CSV rows.
///
/// Every data error carries the 1-based row it was detected on, so the
/// rendered message is a complete diagnostic on its own.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The input ended before the requested number of leading rows.
    #[error("input contains {available} row(s), cannot skip {requested}")]
    TruncatedInput { requested: usize, available: usize },

    /// A zero-length row appeared before end of input.
    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    /// The row has more cells than the record arity.
    #[error("too many columns on row {row}: expected {expected}, found {found}")]
    TooManyColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The row has fewer cells than the record arity.
    #[error("too few columns on row {row}: expected {expected}, found {found}")]
    TooFewColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell could not be converted to its declared column type.
    ///
    /// `column` is 1-based.
    #[error("cannot read \"{value}\" as {expected} at row {row}, column {column}")]
    ColumnType {
        row: usize,
        column: usize,
        expected: &'static str,
        value: String,
    },

    /// Row bytes are not valid UTF-8.
    #[error("row {row} is not valid UTF-8")]
    InvalidUtf8 { row: usize },

    /// The input stream could not be read when the session started.
    #[error("input stream is not readable: {source}")]
    StreamUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// Delimiter configuration is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Read failure after the session started.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Create a ColumnType error.
    pub fn column_type(
        row: usize,
        column: usize,
        expected: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::ColumnType {
            row,
            column,
            expected,
            value: value.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Row the error was detected on, if it is row-scoped.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::EmptyRow { row }
            | Self::TooManyColumns { row, .. }
            | Self::TooFewColumns { row, .. }
            | Self::ColumnType { row, .. }
            | Self::InvalidUtf8 { row } => Some(*row),
            _ => None,
        }
    }
}
