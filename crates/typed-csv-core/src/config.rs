//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CsvError, Result};

/// Delimiter and offset settings for one decoding session.
///
/// Immutable once a session is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Number of leading rows to discard before decoding.
    /// Defaults to 0.
    pub row_skip_offset: usize,

    /// Character separating cells within a row.
    /// Defaults to `','`.
    pub column_delimiter: char,

    /// Character separating rows.
    /// Defaults to `'\n'`.
    pub row_delimiter: char,

    /// Character toggling literal treatment of the column delimiter.
    /// Defaults to `'"'`.
    pub escape_symbol: char,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            row_skip_offset: 0,
            column_delimiter: ',',
            row_delimiter: '\n',
            escape_symbol: '"',
        }
    }
}

impl CsvConfig {
    /// Set the number of leading rows to skip.
    pub fn with_row_skip_offset(mut self, rows: usize) -> Self {
        self.row_skip_offset = rows;
        self
    }

    /// Set the column delimiter.
    pub fn with_column_delimiter(mut self, delimiter: char) -> Self {
        self.column_delimiter = delimiter;
        self
    }

    /// Set the row delimiter.
    pub fn with_row_delimiter(mut self, delimiter: char) -> Self {
        self.row_delimiter = delimiter;
        self
    }

    /// Set the escape symbol.
    pub fn with_escape_symbol(mut self, symbol: char) -> Self {
        self.escape_symbol = symbol;
        self
    }

    /// Check that the three symbols are single-byte and distinct.
    pub fn validate(&self) -> Result<()> {
        let symbols = [
            ("column delimiter", self.column_delimiter),
            ("row delimiter", self.row_delimiter),
            ("escape symbol", self.escape_symbol),
        ];
        for (name, symbol) in symbols {
            if !symbol.is_ascii() {
                return Err(CsvError::invalid_config(format!(
                    "{name} {symbol:?} is not an ASCII character"
                )));
            }
        }
        for (idx, (name, symbol)) in symbols.iter().enumerate() {
            for (other_name, other) in symbols.iter().skip(idx + 1) {
                if symbol == other {
                    return Err(CsvError::invalid_config(format!(
                        "{name} and {other_name} are both {symbol:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Row delimiter as the byte the row reader scans for.
    ///
    /// Only meaningful after [`CsvConfig::validate`] succeeded.
    pub(crate) fn row_delimiter_byte(&self) -> u8 {
        self.row_delimiter as u8
    }
}
