//! In-memory complaint statistics table
//!
//! Rows keep every column from the backing file. The row index is the
//! position in the file; the dataset never reloads, so indices are
//! stable for the lifetime of the process.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

/// Column that partitions the table for every query.
pub const YEAR_COLUMN: &str = "Year";

/// A single typed cell.
///
/// Typing happens once at load time: a field that parses as `i64` is
/// an integer, an empty field is empty, anything else is text. No
/// coercion happens after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Integer(i64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Type a raw field from the backing file.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        match raw.parse::<i64>() {
            Ok(i) => CellValue::Integer(i),
            Err(_) => CellValue::Text(raw.to_string()),
        }
    }

    /// JSON projection: integers stay numbers, text stays a string,
    /// empty becomes null.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Integer(i) => Value::from(*i),
            CellValue::Text(t) => Value::from(t.as_str()),
            CellValue::Empty => Value::Null,
        }
    }
}

/// One observed unit: internal column label -> cell.
pub type Row = BTreeMap<String, CellValue>;

/// The complaint statistics table. Immutable after load.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column labels in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows whose year cell equals `year`, with their positional
    /// indices. A row whose year cell is missing or non-integer
    /// belongs to no group.
    pub fn year_group(&self, year: i64) -> Vec<(usize, &Row)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                matches!(row.get(YEAR_COLUMN), Some(CellValue::Integer(y)) if *y == year)
            })
            .collect()
    }

    /// Distinct years observed in the table.
    pub fn years(&self) -> BTreeSet<i64> {
        self.rows
            .iter()
            .filter_map(|row| match row.get(YEAR_COLUMN) {
                Some(CellValue::Integer(y)) => Some(*y),
                _ => None,
            })
            .collect()
    }
}
