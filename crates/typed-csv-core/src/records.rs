//! Lazy, single-pass record iteration.
//!
//! [`Records`] owns the input stream for the whole session and composes the
//! row reader, tokenizer and a [`RowDecoder`]. Nothing is read until the
//! caller asks for the next record.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//! use typed_csv_core::{CsvConfig, typed_records};
//!
//! let input = Cursor::new("Alice,30\nBob,25\n");
//! let mut records = typed_records::<(String, u32), _>(input, &CsvConfig::default()).unwrap();
//! while records.advance().unwrap() {
//!     let (name, age) = records.current().unwrap();
//!     println!("{name} is {age}");
//! }
//! assert!(records.is_exhausted());
//! ```

use std::io::BufRead;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::CsvConfig;
use crate::decode::{Record, RowDecoder, TupleDecoder};
use crate::error::{CsvError, Result};
use crate::row_reader::RowReader;
use crate::tokenizer::CellTokenizer;

/// Iteration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// More rows may follow.
    Active,
    /// End of input or first error reached. Terminal.
    Exhausted,
}

/// Forward-only producer of decoded records.
pub struct Records<R: BufRead, D: RowDecoder> {
    rows: RowReader<R>,
    tokenizer: CellTokenizer,
    decoder: D,
    state: State,
    current: Option<D::Record>,
    produced: usize,
}

impl<R: BufRead, D: RowDecoder> Records<R, D> {
    /// Start a session over `reader`.
    ///
    /// Validates `config`, checks the stream can be read and skips
    /// `config.row_skip_offset` rows before returning.
    pub fn new(mut reader: R, config: &CsvConfig, decoder: D) -> Result<Self> {
        config.validate()?;
        reader
            .fill_buf()
            .map_err(|source| CsvError::StreamUnavailable { source })?;

        let mut rows = RowReader::new(reader, config.row_delimiter_byte());
        rows.skip(config.row_skip_offset)?;
        debug!(
            arity = decoder.arity(),
            skipped = config.row_skip_offset,
            "decoding session started"
        );

        Ok(Self {
            rows,
            tokenizer: CellTokenizer::from_config(config),
            decoder,
            state: State::Active,
            current: None,
            produced: 0,
        })
    }

    /// Move to the next record.
    ///
    /// Returns `Ok(true)` when a record is available through
    /// [`Records::current`], `Ok(false)` once exhausted. An error ends the
    /// session; later calls return `Ok(false)`.
    pub fn advance(&mut self) -> Result<bool> {
        self.current = None;
        if self.state == State::Exhausted {
            return Ok(false);
        }
        match self.pull() {
            Ok(Some(record)) => {
                self.current = Some(record);
                self.produced += 1;
                Ok(true)
            }
            Ok(None) => {
                self.finish();
                Ok(false)
            }
            Err(error) => {
                debug!(row = self.rows.row_number(), %error, "decoding stopped");
                self.finish();
                Err(error)
            }
        }
    }

    fn pull(&mut self) -> Result<Option<D::Record>> {
        let Some(raw) = self.rows.next_row()? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Err(CsvError::EmptyRow { row: raw.number });
        }
        let cells = self.tokenizer.tokenize(&raw.text);
        trace!(row = raw.number, cells = cells.len(), "tokenized row");
        self.decoder.decode_row(&cells, raw.number).map(Some)
    }

    fn finish(&mut self) {
        if self.state == State::Active {
            debug!(
                rows = self.rows.row_number(),
                records = self.produced,
                "decoding session finished"
            );
        }
        self.state = State::Exhausted;
    }

    /// Record produced by the last successful [`Records::advance`].
    pub fn current(&self) -> Option<&D::Record> {
        self.current.as_ref()
    }

    /// Move the current record out.
    pub fn take_current(&mut self) -> Option<D::Record> {
        self.current.take()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Row number of the last row pulled, counting skipped rows.
    pub fn row_number(&self) -> usize {
        self.rows.row_number()
    }

    /// Number of records produced so far.
    pub fn produced(&self) -> usize {
        self.produced
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }
}

/// Start a session decoding each row into the tuple type `T`.
pub fn typed_records<T: Record, R: BufRead>(
    reader: R,
    config: &CsvConfig,
) -> Result<Records<R, TupleDecoder<T>>> {
    Records::new(reader, config, TupleDecoder::new())
}

impl<R: BufRead, D: RowDecoder> Iterator for Records<R, D> {
    type Item = Result<D::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(true) => self.take_current().map(Ok),
            Ok(false) => None,
            Err(error) => Some(Err(error)),
        }
    }
}

impl<R: BufRead, D: RowDecoder> FusedIterator for Records<R, D> {}
