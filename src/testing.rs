//! Shared fixture builders for the test suites.
//!
//! Always compiled so the tests/ directory can use it, hidden from the
//! rendered documentation. One canonical way to build rows, schemas and
//! datasets keeps the suites from each growing their own.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::dataset::{prepare, Dataset, RawRow, Schema};
use crate::types::Record;

/// The schema used by test rows built with `row`.
pub fn test_schema() -> Schema {
    Schema {
        id: "id".to_string(),
        name: "name".to_string(),
        description: "description".to_string(),
        cost: "cost".to_string(),
    }
}

/// Build one raw row keyed by the `test_schema` columns.
pub fn row(id: &str, name: &str, description: &str, cost: f64) -> RawRow {
    let mut row = RawRow::new();
    row.insert("id".to_string(), Value::String(id.to_string()));
    row.insert("name".to_string(), Value::String(name.to_string()));
    row.insert(
        "description".to_string(),
        Value::String(description.to_string()),
    );
    row.insert("cost".to_string(), json!(cost));
    row
}

/// Build a prepared Dataset from `(id, name, description, cost)` tuples.
///
/// Panics when preparation fails; test fixtures are expected to be valid.
pub fn make_dataset(entries: &[(&str, &str, &str, f64)]) -> Dataset {
    let rows: Vec<RawRow> = entries
        .iter()
        .map(|(id, name, description, cost)| row(id, name, description, *cost))
        .collect();
    prepare(&rows, &test_schema()).expect("test dataset must prepare")
}

/// Create a bare Record without going through preparation.
pub fn make_record(id: &str, name: &str, description: &str, cost: f64) -> Record {
    Record {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        cost,
    }
}
