//! Streaming CSV row decoder producing strongly-typed records.
//!
//! A session pulls rows from any [`BufRead`] stream, splits them into cells
//! and decodes each row into a record of fixed arity. Record types are either
//! tuples known at compile time or a [`Schema`] chosen at runtime.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use typed_csv_core::{CsvConfig, CsvError, typed_records};
//!
//! let input = Cursor::new("name,age\nAlice,30\n\nBob,25\n");
//! let config = CsvConfig::default().with_row_skip_offset(1);
//! let mut records = typed_records::<(String, u32), _>(input, &config).unwrap();
//!
//! assert_eq!(records.next().unwrap().unwrap(), ("Alice".to_string(), 30));
//! assert!(matches!(records.next(), Some(Err(CsvError::EmptyRow { row: 3 }))));
//! assert!(records.next().is_none());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub mod config;
pub mod decode;
mod error;
pub mod records;
pub mod row_reader;
pub mod schema;
pub mod tokenizer;

pub use config::CsvConfig;
pub use decode::{CellValue, Record, RowDecoder, TupleDecoder, decode};
pub use error::{CsvError, Result};
pub use records::{Records, State, typed_records};
pub use row_reader::{RawRow, RowReader};
pub use schema::{ColumnType, DynamicRecord, Schema, Value};
pub use tokenizer::CellTokenizer;

/// Separator used when rendering a record on one line.
pub const FIELD_SEPARATOR: &str = ", ";

/// Open a file as a buffered input stream.
///
/// Failure to open is reported as [`CsvError::StreamUnavailable`].
pub fn open_path(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| CsvError::StreamUnavailable { source })?;
    Ok(BufReader::new(file))
}

/// Join rendered fields with [`FIELD_SEPARATOR`].
pub fn render_fields<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(FIELD_SEPARATOR)
}

/// Render a tuple record on one line, e.g. `Alice, 30, Engineer`.
pub fn render_record<T: Record>(record: &T) -> String {
    render_fields(&record.to_cells())
}

/// Start a session over an already opened stream with a runtime schema.
pub fn schema_records<R: BufRead>(
    reader: R,
    config: &CsvConfig,
    schema: Schema,
) -> Result<Records<R, Schema>> {
    Records::new(reader, config, schema)
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
