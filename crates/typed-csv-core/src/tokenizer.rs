//! Cell tokenization of a single raw row.
//!
//! The escape symbol toggles escape handling each time it appears and is
//! never copied into a cell. While escape handling is active the column
//! delimiter is kept as literal text, so a balanced pair quotes the text
//! between them and an unbalanced symbol stays in effect until row end.

use crate::config::CsvConfig;

/// Splits rows into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTokenizer {
    column_delimiter: char,
    escape_symbol: char,
}

impl CellTokenizer {
    pub fn new(column_delimiter: char, escape_symbol: char) -> Self {
        Self {
            column_delimiter,
            escape_symbol,
        }
    }

    pub fn from_config(config: &CsvConfig) -> Self {
        Self::new(config.column_delimiter, config.escape_symbol)
    }

    /// Split `row` into cells.
    ///
    /// Always yields at least one cell; a trailing delimiter yields a
    /// trailing empty cell. The count is not checked against any arity.
    pub fn tokenize(&self, row: &str) -> Vec<String> {
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut escaped = false;

        for ch in row.chars() {
            if ch == self.escape_symbol {
                escaped = !escaped;
                continue;
            }
            if ch == self.column_delimiter && !escaped {
                cells.push(std::mem::take(&mut cell));
                continue;
            }
            cell.push(ch);
        }
        cells.push(cell);
        cells
    }

    /// Join cells back into a row with the column delimiter.
    ///
    /// Inverse of [`CellTokenizer::tokenize`] for cells that contain neither
    /// the delimiter nor the escape symbol.
    pub fn join<S: AsRef<str>>(&self, cells: &[S]) -> String {
        let mut row = String::new();
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                row.push(self.column_delimiter);
            }
            row.push_str(cell.as_ref());
        }
        row
    }
}

impl Default for CellTokenizer {
    fn default() -> Self {
        Self::from_config(&CsvConfig::default())
    }
}
