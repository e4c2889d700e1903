//! Comparison predicates over typed cells
//!
//! Ordering predicates apply to integer cells only. Equality never
//! crosses types: an integer cell and a text cell are never equal.

use crate::dataset::CellValue;

/// Equality operand.
///
/// A request value made up entirely of ASCII digits compares as an
/// integer; anything else compares as exact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EqValue {
    Integer(i64),
    Text(String),
}

impl EqValue {
    pub fn from_raw(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            // Digit strings too large for i64 fall back to text and
            // match no integer cell.
            if let Ok(i) = raw.parse::<i64>() {
                return EqValue::Integer(i);
            }
        }
        EqValue::Text(raw.to_string())
    }
}

/// One comparison applied to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    LessThan(i64),
    GreaterThan(i64),
    EqualTo(EqValue),
}

impl Predicate {
    /// Whether a cell satisfies this predicate.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            Predicate::LessThan(bound) => {
                matches!(cell, CellValue::Integer(i) if i < bound)
            }
            Predicate::GreaterThan(bound) => {
                matches!(cell, CellValue::Integer(i) if i > bound)
            }
            Predicate::EqualTo(EqValue::Integer(v)) => {
                matches!(cell, CellValue::Integer(i) if i == v)
            }
            Predicate::EqualTo(EqValue::Text(s)) => {
                matches!(cell, CellValue::Text(t) if t == s)
            }
        }
    }
}
