// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File ingestion: turning an uploaded table into rows the engine accepts.
//!
//! Everything in this module is collaborator territory from the engine's
//! point of view - format detection, encoding fallback, column mapping, and
//! typed cost parsing all happen here so that `dataset::prepare` only ever
//! sees rows resolved to the four logical columns.
//!
//! Formats: `.csv` (UTF-8, falling back to Latin-1 when the bytes don't
//! decode - exported spreadsheets from older Windows tooling are still
//! everywhere), and `.xls`/`.xlsx` via calamine. The first worksheet wins.
//!
//! Cost cells arrive as text in CSV files. `typed_rows` parses them into
//! numbers, accepting both `1234.56` and the Brazilian `1.234,56` shape.
//! Cells that don't parse are passed through as strings on purpose: rejecting
//! them with a real error is `prepare`'s job.

pub mod columns;

pub use columns::map_columns;

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;

use crate::dataset::{RawRow, Schema};

/// A loaded table: ordered headers plus rows keyed by those headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Why a file could not be turned into a table.
#[derive(Debug)]
pub enum IngestError {
    Io(io::Error),
    /// The file extension isn't one we read.
    UnsupportedFormat(String),
    /// calamine could not read the workbook.
    Workbook(String),
    /// The file parsed but held no header row.
    EmptyFile,
    /// Column mapping failed; carries what was looked for and what was there.
    UnmappedColumns {
        missing: Vec<String>,
        available: Vec<String>,
    },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(err) => write!(f, "could not read file: {}", err),
            IngestError::UnsupportedFormat(ext) => {
                write!(f, "unsupported file format '{}' (use csv, xls or xlsx)", ext)
            }
            IngestError::Workbook(err) => write!(f, "could not read workbook: {}", err),
            IngestError::EmptyFile => write!(f, "file contains no header row"),
            IngestError::UnmappedColumns { missing, available } => write!(
                f,
                "columns not found: {} (available: {})",
                missing.join(", "),
                available.join(", ")
            ),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IngestError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for IngestError {
    fn from(err: io::Error) -> Self {
        IngestError::Io(err)
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Load a table from disk, dispatching on the file extension.
pub fn load_table(path: &Path) -> Result<RawTable, IngestError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => load_csv(path),
        "xls" | "xlsx" => load_workbook(path),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

fn load_csv(path: &Path) -> Result<RawTable, IngestError> {
    let bytes = fs::read(path)?;
    let text = decode(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::Workbook(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Workbook(e.to_string()))?;
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let value = if cell.trim().is_empty() {
                Value::Null
            } else {
                Value::String(cell.to_string())
            };
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

/// Decode CSV bytes: UTF-8 first, Latin-1 when that fails.
///
/// Latin-1 maps every byte to the code point of the same value, so the
/// fallback cannot itself fail - it can only mojibake text that was really
/// in some third encoding, which is the accepted trade.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

fn load_workbook(path: &Path) -> Result<RawTable, IngestError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook(e.to_string()))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::EmptyFile)?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Workbook(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or(IngestError::EmptyFile)?
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for sheet_row in rows_iter {
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(sheet_row.iter()) {
            row.insert(header.clone(), cell_value(cell));
        }
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) if s.trim().is_empty() => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => number(*f),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::from(*b),
        other => Value::String(other.to_string()),
    }
}

// =============================================================================
// TYPED ROWS
// =============================================================================

/// Parse the cost column of every row into a number where possible.
///
/// Only the cost column is touched: ids are preserved verbatim, and "007"
/// must stay "007". Unparseable cost cells stay strings so that `prepare`
/// raises its data-integrity error instead of this layer silently dropping
/// the row.
pub fn typed_rows(table: RawTable, schema: &Schema) -> Vec<RawRow> {
    table
        .rows
        .into_iter()
        .map(|mut row| {
            if let Some(Value::String(cell)) = row.get(&schema.cost) {
                if let Some(cost) = parse_number(cell) {
                    row.insert(schema.cost.clone(), number(cost));
                }
            }
            row
        })
        .collect()
}

/// Parse a numeric cell in either `1234.56` or `1.234,56` form.
fn parse_number(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value);
    }
    // Brazilian format: '.' thousands separator, ',' decimal separator.
    if trimmed.contains(',') {
        let converted = trimmed.replace('.', "").replace(',', ".");
        return converted.parse::<f64>().ok();
    }
    None
}

fn number(value: f64) -> Value {
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}
