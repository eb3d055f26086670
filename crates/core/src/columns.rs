//! Column-oriented view of aggregator output.

use serde::Serialize;
use serde_json::{Map, Value};

/// Column name to ordered values.
pub type Columns = Map<String, Value>;

/// Turns a list of flat rows into `column -> [values]`, preserving row order.
///
/// Rows that do not serialize to a JSON object are rejected.
pub fn to_columns<T: Serialize>(rows: &[T]) -> serde_json::Result<Columns> {
    let mut columns = Columns::new();
    for (index, row) in rows.iter().enumerate() {
        let Value::Object(fields) = serde_json::to_value(row)? else {
            return Err(serde::ser::Error::custom(format!("row {index} is not an object")));
        };
        for (name, value) in fields {
            let column = columns
                .entry(name)
                .or_insert_with(|| Value::Array(Vec::with_capacity(rows.len())));
            if let Value::Array(values) = column {
                values.push(value);
            }
        }
    }
    Ok(columns)
}
