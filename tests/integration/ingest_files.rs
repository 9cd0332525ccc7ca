//! File-to-results pipeline tests over temporary CSV uploads.

use std::fs;
use std::io::Write;

use busca::dataset::prepare;
use busca::ingest::{load_table, map_columns, typed_rows, IngestError};
use busca::types::RankOptions;
use busca::rank_hits;
use tempfile::TempDir;

use crate::common::sample_csv;

fn write_csv(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    path
}

#[test]
fn csv_upload_flows_through_to_ranked_hits() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "projetos.csv", sample_csv().as_bytes());

    let table = load_table(&path).unwrap();
    let schema = map_columns(&table.headers).unwrap();
    let rows = typed_rows(table, &schema);
    let dataset = prepare(&rows, &schema).unwrap();
    assert_eq!(dataset.len(), 3);

    let hits = rank_hits(
        &dataset,
        "equipamentos de informática",
        &RankOptions::default(),
    );
    assert_eq!(hits[0].id, "3");
    // Brazilian-format cost cell "1.234,56" parsed on the way in.
    assert_eq!(hits[0].cost, 1234.56);
}

#[test]
fn latin1_csv_is_decoded_transparently() {
    let dir = TempDir::new().unwrap();
    // Same content as sample_csv but with the accented header and cells
    // re-encoded byte-for-byte as Latin-1.
    let latin1: Vec<u8> = sample_csv()
        .chars()
        .map(|c| {
            let code = c as u32;
            assert!(code < 256, "fixture must stay within Latin-1");
            code as u8
        })
        .collect();
    let path = write_csv(&dir, "projetos.csv", &latin1);

    let table = load_table(&path).unwrap();
    assert!(table.headers.contains(&"Descrição".to_string()));
    let schema = map_columns(&table.headers).unwrap();
    assert_eq!(schema.description, "Descrição");
}

#[test]
fn decorated_headers_still_map() {
    let dir = TempDir::new().unwrap();
    let csv = "id do projeto (novo),NOME DO PROJETO,descricao detalhada,Custo Proposto (R$)\n\
               A-1,Obra,reforma geral do telhado,1000.00\n";
    let path = write_csv(&dir, "projetos.csv", csv.as_bytes());

    let table = load_table(&path).unwrap();
    let schema = map_columns(&table.headers).unwrap();
    let rows = typed_rows(table, &schema);
    let dataset = prepare(&rows, &schema).unwrap();
    assert_eq!(dataset.records()[0].id, "A-1");
    assert_eq!(dataset.records()[0].cost, 1000.0);
}

#[test]
fn unmappable_csv_reports_missing_columns() {
    let dir = TempDir::new().unwrap();
    let csv = "ID do Projeto,Nome do Projeto\n1,Obra\n";
    let path = write_csv(&dir, "projetos.csv", csv.as_bytes());

    let table = load_table(&path).unwrap();
    let err = map_columns(&table.headers).unwrap_err();
    match err {
        IngestError::UnmappedColumns { missing, available } => {
            assert_eq!(missing, vec!["Descrição", "Custo proposto"]);
            assert_eq!(available.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_rows_leave_trailing_cells_absent() {
    let dir = TempDir::new().unwrap();
    let csv = "ID do Projeto,Nome do Projeto,Descrição,Custo proposto\n\
               1,Obra,reforma geral\n\
               2,Pintura,pintura externa,500.00\n";
    let path = write_csv(&dir, "projetos.csv", csv.as_bytes());

    let table = load_table(&path).unwrap();
    let schema = map_columns(&table.headers).unwrap();
    let rows = typed_rows(table, &schema);
    // Row 1 has no cost cell, so prepare drops it and keeps row 2.
    let dataset = prepare(&rows, &schema).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].id, "2");
}

#[test]
fn unknown_extension_is_rejected_before_reading() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "projetos.txt", b"whatever");
    assert!(matches!(
        load_table(&path),
        Err(IngestError::UnsupportedFormat(ext)) if ext == "txt"
    ));
}
