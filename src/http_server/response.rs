//! Response Formatting
//!
//! The query endpoint answers with a JSON object keyed by the decimal
//! row index; each value maps internal column label to cell value.

use serde_json::{Map, Value};

use crate::query::ResultSet;

/// Project a result set into its row-indexed JSON form.
///
/// An empty result set serializes as `{}`.
pub fn rows_by_index(result: &ResultSet<'_>) -> Value {
    let mut body = Map::new();

    for (index, row) in &result.rows {
        let cells: Map<String, Value> = row
            .iter()
            .map(|(label, cell)| (label.clone(), cell.to_json()))
            .collect();
        body.insert(index.to_string(), Value::Object(cells));
    }

    Value::Object(body)
}
