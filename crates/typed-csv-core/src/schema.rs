//! Column types chosen at runtime.
//!
//! A [`Schema`] is the dynamic counterpart of a tuple record type: a fixed,
//! non-empty list of [`ColumnType`] tags. Rows decode into a [`DynamicRecord`]
//! whose length always equals the schema arity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::{RowDecoder, check_arity, parse_column};
use crate::error::{CsvError, Result};

/// Type tag for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Cell text, unchanged.
    String,
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// `true` or `false`.
    Bool,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Bool => "bool",
        }
    }

    /// Decode one cell at 0-based `index`.
    pub fn parse(self, cell: &str, row: usize, index: usize) -> Result<Value> {
        Ok(match self {
            ColumnType::String => Value::String(cell.to_string()),
            ColumnType::Int => Value::Int(parse_column(cell, row, index)?),
            ColumnType::Float => Value::Float(parse_column(cell, row, index)?),
            ColumnType::Bool => Value::Bool(parse_column(cell, row, index)?),
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => Ok(ColumnType::String),
            "int" | "integer" | "i64" => Ok(ColumnType::Int),
            "float" | "double" | "f64" => Ok(ColumnType::Float),
            "bool" | "boolean" => Ok(ColumnType::Bool),
            other => Err(CsvError::invalid_config(format!(
                "unknown column type '{other}'"
            ))),
        }
    }
}

/// One decoded cell of a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(value) => f.write_str(value),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// A record decoded against a [`Schema`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DynamicRecord {
    values: Vec<Value>,
}

impl DynamicRecord {
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render every field as cell text, in column order.
    pub fn to_cells(&self) -> Vec<String> {
        self.values.iter().map(ToString::to_string).collect()
    }
}

/// Ordered, non-empty list of column types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColumnType>", into = "Vec<ColumnType>")]
pub struct Schema {
    columns: Vec<ColumnType>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnType>) -> Result<Self> {
        if columns.is_empty() {
            return Err(CsvError::invalid_config(
                "schema must declare at least one column",
            ));
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnType] {
        &self.columns
    }

    /// Decode `cells`, checking the count before any cell is parsed.
    pub fn decode(&self, cells: &[String], row: usize) -> Result<DynamicRecord> {
        check_arity(cells.len(), self.columns.len(), row)?;
        let values = self
            .columns
            .iter()
            .zip(cells)
            .enumerate()
            .map(|(index, (column, cell))| column.parse(cell, row, index))
            .collect::<Result<Vec<_>>>()?;
        Ok(DynamicRecord { values })
    }
}

impl TryFrom<Vec<ColumnType>> for Schema {
    type Error = CsvError;

    fn try_from(columns: Vec<ColumnType>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<Schema> for Vec<ColumnType> {
    fn from(schema: Schema) -> Self {
        schema.columns
    }
}

/// Parses a comma-separated list such as `string,int,string`.
impl FromStr for Schema {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self> {
        let columns = s
            .split(',')
            .map(ColumnType::from_str)
            .collect::<Result<Vec<_>>>()?;
        Self::new(columns)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, column) in self.columns.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(column.as_str())?;
        }
        Ok(())
    }
}

impl RowDecoder for Schema {
    type Record = DynamicRecord;

    fn arity(&self) -> usize {
        self.columns.len()
    }

    fn decode_row(&self, cells: &[String], row: usize) -> Result<DynamicRecord> {
        self.decode(cells, row)
    }
}
