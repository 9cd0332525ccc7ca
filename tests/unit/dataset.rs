//! Dataset preparation behavior on messier-than-usual rows.

use busca::dataset::{prepare, DatasetError};
use busca::testing::{row, test_schema};
use busca::types::{Field, RecordIdx};
use serde_json::{json, Value};

#[test]
fn upload_order_is_preserved() {
    let rows = vec![
        row("z", "Último", "descrição z", 1.0),
        row("a", "Primeiro", "descrição a", 2.0),
    ];
    let dataset = prepare(&rows, &test_schema()).unwrap();
    assert_eq!(dataset.records()[0].id, "z");
    assert_eq!(dataset.records()[1].id, "a");
}

#[test]
fn ids_with_leading_zeros_stay_verbatim() {
    let rows = vec![row("007", "Obra", "reforma geral", 5.0)];
    let dataset = prepare(&rows, &test_schema()).unwrap();
    assert_eq!(dataset.records()[0].id, "007");
}

#[test]
fn numeric_name_cells_are_coerced_to_text() {
    let mut r = row("1", "ignored", "reforma geral", 5.0);
    r.insert("name".to_string(), json!(2024));
    let dataset = prepare(&rows_of(r), &test_schema()).unwrap();
    assert_eq!(dataset.records()[0].name, "2024");
}

#[test]
fn string_cost_is_an_integrity_error_not_a_drop() {
    // The ingestion layer parses cost text; if a string reaches prepare it
    // must fail loudly rather than drop the row or guess a number.
    let mut r = row("1", "Obra", "reforma geral", 5.0);
    r.insert("cost".to_string(), Value::String("45000.00".to_string()));
    assert!(matches!(
        prepare(&rows_of(r), &test_schema()),
        Err(DatasetError::InvalidCost { row: 0, .. })
    ));
}

#[test]
fn empty_normalized_fields_are_tolerated() {
    // Name made entirely of stopwords normalizes to "" and must not break
    // anything downstream.
    let rows = vec![row("1", "do de para", "reforma geral do predio", 5.0)];
    let dataset = prepare(&rows, &test_schema()).unwrap();
    assert_eq!(dataset.normalized_field(RecordIdx(0), Field::Name), "");
    assert_eq!(
        dataset.normalized_field(RecordIdx(0), Field::Description),
        "reforma geral predio"
    );
}

fn rows_of(row: busca::dataset::RawRow) -> Vec<busca::dataset::RawRow> {
    vec![row]
}
