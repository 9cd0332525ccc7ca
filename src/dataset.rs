// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset preparation: from raw mapped rows to an immutable, queryable set.
//!
//! `prepare` is the only way to build a `Dataset`, and a `Dataset` never
//! changes after it exists. Re-uploading data means building a new Dataset
//! wholesale; there are no partial updates.
//!
//! Normalized text is not stored on the records themselves. It lives in a
//! parallel arena of write-once cells, keyed by record position, populated on
//! first access. Recomputing the same value from two threads is harmless -
//! `OnceLock` keeps one copy and drops the other, so the cache needs no
//! locking and caller-visible state is never mutated.
//!
//! # Invariants
//!
//! - `records.len() == cache.len()` - the arena lines up with the records.
//! - Every surviving record has non-null id, name, description, and a finite
//!   non-negative cost. The ranker relies on this and does not re-validate.
//! - A Dataset with zero records cannot be constructed (`EmptyAfterCleaning`).

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use crate::normalize::normalize;
use crate::types::{Field, Record, RecordIdx};

/// A raw row: column name to value, already resolved by the ingestion layer.
pub type RawRow = serde_json::Map<String, Value>;

/// Column names for the four logical fields, as they appear in `RawRow` keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: String,
}

impl Schema {
    fn columns(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.description, &self.cost]
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Why a raw dataset could not be prepared.
///
/// `MissingColumns` and `EmptyAfterCleaning` are validation errors the user
/// can act on. `InvalidCost` is a data-integrity error: a cost value was
/// present but not a usable number, and guessing one is off the table.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// One or more required columns never appear in the rows.
    MissingColumns(Vec<String>),
    /// Every row was dropped for missing values; there is no usable data.
    EmptyAfterCleaning,
    /// A cost value was present but non-numeric, negative, or non-finite.
    InvalidCost { row: usize, value: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::MissingColumns(columns) => {
                write!(f, "required columns not found: {}", columns.join(", "))
            }
            DatasetError::EmptyAfterCleaning => {
                write!(f, "no usable rows remain after dropping incomplete data")
            }
            DatasetError::InvalidCost { row, value } => {
                write!(f, "row {}: cost '{}' is not a non-negative number", row, value)
            }
        }
    }
}

impl Error for DatasetError {}

// =============================================================================
// DATASET
// =============================================================================

/// Per-record write-once normalization cells.
#[derive(Debug, Default, PartialEq)]
struct FieldCache {
    name: OnceLock<String>,
    description: OnceLock<String>,
}

/// An ordered, immutable collection of validated records plus the arena of
/// normalized-text caches. Lives for one session; replaced wholesale on the
/// next upload.
#[derive(Debug, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    cache: Vec<FieldCache>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A prepared Dataset is never empty, but the conventional pair exists.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in upload order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up one record. Panics on an index from a different Dataset.
    pub fn record(&self, idx: RecordIdx) -> &Record {
        &self.records[idx.as_usize()]
    }

    /// The normalized text of one field, computed on first access and cached
    /// for the Dataset's lifetime.
    pub fn normalized_field(&self, idx: RecordIdx, field: Field) -> &str {
        let record = &self.records[idx.as_usize()];
        let cache = &self.cache[idx.as_usize()];
        match field {
            Field::Name => cache.name.get_or_init(|| normalize(&record.name)),
            Field::Description => cache
                .description
                .get_or_init(|| normalize(&record.description)),
        }
    }

    /// Iterate `(index, normalized text)` for one field across all records.
    pub(crate) fn normalized_fields(
        &self,
        field: Field,
    ) -> impl Iterator<Item = (RecordIdx, &str)> {
        (0..self.records.len() as u32)
            .map(RecordIdx)
            .map(move |idx| (idx, self.normalized_field(idx, field)))
    }

    /// Sum of all record costs.
    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost).sum()
    }

    /// Mean record cost. The Dataset is non-empty, so this is well-defined.
    pub fn mean_cost(&self) -> f64 {
        self.total_cost() / self.records.len() as f64
    }

    /// Largest record cost.
    pub fn max_cost(&self) -> f64 {
        self.records.iter().map(|r| r.cost).fold(0.0, f64::max)
    }
}

// =============================================================================
// PREPARATION
// =============================================================================

/// Build a Dataset from raw rows whose columns are already mapped.
///
/// - Fails with `MissingColumns` when a required column appears in no row.
/// - Drops rows with a null or absent value in any required column.
/// - Fails with `InvalidCost` on a present but unusable cost value - the
///   engine never guesses a number.
/// - Fails with `EmptyAfterCleaning` when nothing survives.
pub fn prepare(rows: &[RawRow], schema: &Schema) -> Result<Dataset, DatasetError> {
    let missing = missing_columns(rows, schema);
    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns(missing));
    }

    let mut records = Vec::with_capacity(rows.len());
    for (row_idx, row) in rows.iter().enumerate() {
        let id = row.get(&schema.id).and_then(as_text);
        let name = row.get(&schema.name).and_then(as_text);
        let description = row.get(&schema.description).and_then(as_text);
        let cost_value = row.get(&schema.cost).filter(|v| !v.is_null());

        let (Some(id), Some(name), Some(description), Some(cost_value)) =
            (id, name, description, cost_value)
        else {
            // Incomplete row: drop it, like the rest of the cleaning pass.
            continue;
        };

        let cost = parse_cost(cost_value).ok_or_else(|| DatasetError::InvalidCost {
            row: row_idx,
            value: display_value(cost_value),
        })?;

        records.push(Record {
            id,
            name,
            description,
            cost,
        });
    }

    if records.is_empty() {
        return Err(DatasetError::EmptyAfterCleaning);
    }

    let cache = records.iter().map(|_| FieldCache::default()).collect();
    Ok(Dataset { records, cache })
}

/// Required columns that appear in no row at all.
///
/// With zero rows every column is reported missing; callers that can tell an
/// empty file apart (the ingestion layer) report that earlier with a better
/// message.
fn missing_columns(rows: &[RawRow], schema: &Schema) -> Vec<String> {
    let present: BTreeSet<&str> = rows.iter().flat_map(|row| row.keys()).map(String::as_str).collect();
    schema
        .columns()
        .iter()
        .filter(|column| !present.contains(**column))
        .map(|column| (*column).to_string())
        .collect()
}

/// Coerce a cell to text. Strings pass through; numbers and booleans become
/// their display form; null, arrays, and objects count as missing.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Accept only an actual JSON number that is finite and non-negative.
/// Numeric-looking strings are the ingestion layer's problem, not ours.
fn parse_cost(value: &Value) -> Option<f64> {
    let cost = value.as_f64()?;
    (cost.is_finite() && cost >= 0.0).then_some(cost)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
