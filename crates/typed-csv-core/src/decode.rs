//! Typed decoding of cell sequences into records.
//!
//! A record type fixes the arity and the per-column types at compile time.
//! Tuples of up to twelve [`CellValue`] types implement [`Record`]:
//!
//! ```
//! use typed_csv_core::decode::decode;
//!
//! let cells = vec!["Alice".to_string(), "30".to_string()];
//! let (name, age): (String, u8) = decode(&cells, 1).unwrap();
//! assert_eq!(name, "Alice");
//! assert_eq!(age, 30);
//! ```

use std::marker::PhantomData;

use crate::error::{CsvError, Result};

/// A value that can be read from, and rendered back to, a single cell.
pub trait CellValue: Sized {
    /// Type name used in diagnostics.
    const TYPE_NAME: &'static str;

    /// Strictly parse a cell. `None` means the text is not a valid value.
    fn parse_cell(cell: &str) -> Option<Self>;

    /// Render the value as cell text.
    fn render_cell(&self) -> String;
}

impl CellValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_cell(cell: &str) -> Option<Self> {
        Some(cell.to_string())
    }

    fn render_cell(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_cell_value_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CellValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_cell(cell: &str) -> Option<Self> {
                    cell.parse().ok()
                }

                fn render_cell(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_cell_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

/// Empty cells decode to `None`; anything else must parse as `T`.
impl<T: CellValue> CellValue for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn parse_cell(cell: &str) -> Option<Self> {
        if cell.is_empty() {
            Some(None)
        } else {
            T::parse_cell(cell).map(Some)
        }
    }

    fn render_cell(&self) -> String {
        self.as_ref().map(CellValue::render_cell).unwrap_or_default()
    }
}

/// Parse the cell at 0-based `index`, attaching row and 1-based column on failure.
pub fn parse_column<T: CellValue>(cell: &str, row: usize, index: usize) -> Result<T> {
    T::parse_cell(cell).ok_or_else(|| CsvError::column_type(row, index + 1, T::TYPE_NAME, cell))
}

/// A fixed-arity record decoded from one row.
pub trait Record: Sized {
    /// Number of columns.
    const ARITY: usize;

    /// Decode from exactly [`Record::ARITY`] cells, left to right.
    ///
    /// Any other cell count is rejected with [`CsvError::TooManyColumns`] or
    /// [`CsvError::TooFewColumns`].
    fn from_cells(cells: &[String], row: usize) -> Result<Self>;

    /// Render every field as cell text, in column order.
    fn to_cells(&self) -> Vec<String>;
}

macro_rules! impl_record_for_tuple {
    ($arity:expr => $($name:ident : $idx:tt),+) => {
        impl<$($name: CellValue),+> Record for ($($name,)+) {
            const ARITY: usize = $arity;

            fn from_cells(cells: &[String], row: usize) -> Result<Self> {
                check_arity(cells.len(), $arity, row)?;
                Ok(($(parse_column::<$name>(&cells[$idx], row, $idx)?,)+))
            }

            fn to_cells(&self) -> Vec<String> {
                vec![$(self.$idx.render_cell()),+]
            }
        }
    };
}

impl_record_for_tuple!(1 => A: 0);
impl_record_for_tuple!(2 => A: 0, B: 1);
impl_record_for_tuple!(3 => A: 0, B: 1, C: 2);
impl_record_for_tuple!(4 => A: 0, B: 1, C: 2, D: 3);
impl_record_for_tuple!(5 => A: 0, B: 1, C: 2, D: 3, E: 4);
impl_record_for_tuple!(6 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_record_for_tuple!(7 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_record_for_tuple!(8 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_record_for_tuple!(9 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_record_for_tuple!(10 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_record_for_tuple!(11 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_record_for_tuple!(12 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);

/// Validate the number of cells against the expected arity.
pub fn check_arity(found: usize, expected: usize, row: usize) -> Result<()> {
    if found > expected {
        return Err(CsvError::TooManyColumns {
            row,
            expected,
            found,
        });
    }
    if found < expected {
        return Err(CsvError::TooFewColumns {
            row,
            expected,
            found,
        });
    }
    Ok(())
}

/// Decode `cells` into `T`, rejecting a cell count other than `T::ARITY`.
pub fn decode<T: Record>(cells: &[String], row: usize) -> Result<T> {
    T::from_cells(cells, row)
}

/// Turns a tokenized row into a record.
///
/// Implemented by [`TupleDecoder`] for compile-time record types and by
/// [`crate::schema::Schema`] for column types chosen at runtime.
pub trait RowDecoder {
    type Record;

    /// Number of cells every row must have.
    fn arity(&self) -> usize;

    /// Decode one row. Must reject cell counts other than [`RowDecoder::arity`].
    fn decode_row(&self, cells: &[String], row: usize) -> Result<Self::Record>;
}

/// Decoder for a compile-time record type.
pub struct TupleDecoder<T>(PhantomData<fn() -> T>);

impl<T> TupleDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TupleDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TupleDecoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TupleDecoder")
            .field(&std::any::type_name::<T>())
            .finish()
    }
}

impl<T: Record> RowDecoder for TupleDecoder<T> {
    type Record = T;

    fn arity(&self) -> usize {
        T::ARITY
    }

    fn decode_row(&self, cells: &[String], row: usize) -> Result<T> {
        decode(cells, row)
    }
}
