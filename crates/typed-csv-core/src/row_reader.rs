//! Raw row segmentation over a buffered byte stream.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{CsvError, Result};

/// One unparsed row and the 1-based row number it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub number: usize,
    pub text: String,
}

impl RawRow {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Pulls one row at a time from the underlying stream.
///
/// The stream position only moves forward; nothing past the current row is
/// buffered beyond what `BufRead` itself holds.
pub struct RowReader<R: BufRead> {
    reader: R,
    delimiter: u8,
    row: usize,
    at_end: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> RowReader<R> {
    /// Create a row reader splitting on `delimiter`.
    pub fn new(reader: R, delimiter: u8) -> Self {
        Self {
            reader,
            delimiter,
            row: 0,
            at_end: false,
            buf: Vec::new(),
        }
    }

    /// Number of the last row pulled from the stream (0 before the first).
    pub fn row_number(&self) -> usize {
        self.row
    }

    /// True once a read has hit end of input.
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Discard the next `count` rows.
    ///
    /// Fails with [`CsvError::TruncatedInput`] when the input holds fewer rows.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        for skipped in 0..count {
            if !self.read_raw()? {
                return Err(CsvError::TruncatedInput {
                    requested: count,
                    available: skipped,
                });
            }
            self.row += 1;
        }
        if count > 0 {
            debug!(rows = count, "skipped leading rows");
        }
        Ok(())
    }

    /// Read the next row.
    ///
    /// Returns `None` when end of input is reached with nothing left to read.
    /// A returned row with empty text is a blank line inside the input.
    pub fn next_row(&mut self) -> Result<Option<RawRow>> {
        if !self.read_raw()? {
            trace!(rows = self.row, "end of input");
            return Ok(None);
        }
        self.row += 1;
        let bytes = std::mem::take(&mut self.buf);
        let text =
            String::from_utf8(bytes).map_err(|_| CsvError::InvalidUtf8 { row: self.row })?;
        trace!(row = self.row, len = text.len(), "read row");
        Ok(Some(RawRow {
            number: self.row,
            text,
        }))
    }

    /// Fill `buf` with the next row, without the delimiter.
    ///
    /// Returns false when nothing could be read because input is exhausted.
    fn read_raw(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.at_end {
            return Ok(false);
        }
        let read = self.reader.read_until(self.delimiter, &mut self.buf)?;
        if read == 0 {
            self.at_end = true;
            return Ok(false);
        }
        if self.buf.last() == Some(&self.delimiter) {
            self.buf.pop();
        } else {
            self.at_end = true;
        }
        Ok(true)
    }

    /// Release the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> RowReader<Cursor<&[u8]>> {
        RowReader::new(Cursor::new(input.as_bytes()), b'\n')
    }

    fn texts(mut rows: RowReader<Cursor<&[u8]>>) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(row) = rows.next_row().unwrap() {
            out.push(row.text);
        }
        out
    }

    #[test]
    fn reads_rows_and_counts_from_one() {
        let mut rows = reader("a\nb\n");
        let first = rows.next_row().unwrap().unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(first.text, "a");
        let second = rows.next_row().unwrap().unwrap();
        assert_eq!(second.number, 2);
        assert_eq!(second.text, "b");
        assert!(rows.next_row().unwrap().is_none());
        assert!(rows.is_at_end());
    }

    #[test]
    fn final_row_without_delimiter_is_returned() {
        assert_eq!(texts(reader("a\nb")), vec!["a", "b"]);
    }

    #[test]
    fn blank_line_is_distinct_from_end() {
        let mut rows = reader("a\n\nb\n");
        rows.next_row().unwrap();
        let blank = rows.next_row().unwrap().expect("blank row is not end of input");
        assert!(blank.is_empty());
        assert_eq!(blank.number, 2);
        assert!(!rows.is_at_end());
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut rows = reader("");
        assert!(rows.next_row().unwrap().is_none());
        assert!(rows.next_row().unwrap().is_none());
    }

    #[test]
    fn custom_delimiter() {
        let rows = RowReader::new(Cursor::new("a;b;c".as_bytes()), b';');
        assert_eq!(texts(rows), vec!["a", "b", "c"]);
    }

    #[test]
    fn skip_advances_row_counter() {
        let mut rows = reader("h1\nh2\nx\n");
        rows.skip(2).unwrap();
        assert_eq!(rows.row_number(), 2);
        let row = rows.next_row().unwrap().unwrap();
        assert_eq!(row.number, 3);
        assert_eq!(row.text, "x");
    }

    #[test]
    fn skip_all_rows_is_allowed() {
        let mut rows = reader("a\nb\n");
        rows.skip(2).unwrap();
        assert!(rows.next_row().unwrap().is_none());
    }

    #[test]
    fn skip_past_end_is_truncated() {
        let mut rows = reader("a\nb\n");
        let err = rows.skip(3).unwrap_err();
        assert!(matches!(
            err,
            CsvError::TruncatedInput {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn invalid_utf8_reports_row() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let mut rows = RowReader::new(Cursor::new(bytes), b'\n');
        rows.next_row().unwrap();
        let err = rows.next_row().unwrap_err();
        assert!(matches!(err, CsvError::InvalidUtf8 { row: 2 }));
    }
}
