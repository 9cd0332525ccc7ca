// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy column-name mapping onto the four logical fields.
//!
//! Real uploads rarely carry the exact canonical headers. "id do projeto",
//! "DESCRIÇÃO", "Custo Proposto (R$)" all have to resolve. The matching rule
//! is deliberately loose: case- and accent-folded containment in either
//! direction between the header and the canonical name. The first header that
//! matches a logical field claims it.

use crate::dataset::Schema;
use crate::ingest::IngestError;
use crate::normalize::fold;

/// Canonical Portuguese header for each logical field, in resolution order.
const CANONICAL: [(&str, Logical); 4] = [
    ("ID do Projeto", Logical::Id),
    ("Nome do Projeto", Logical::Name),
    ("Descrição", Logical::Description),
    ("Custo proposto", Logical::Cost),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Logical {
    Id,
    Name,
    Description,
    Cost,
}

/// Resolve the file's headers onto the four logical columns.
///
/// Returns a `Schema` holding the *actual* header names, since rows are keyed
/// by them. Fails with `UnmappedColumns` naming every canonical column that
/// found no header.
pub fn map_columns(headers: &[String]) -> Result<Schema, IngestError> {
    let folded: Vec<String> = headers.iter().map(|h| fold(h)).collect();

    let mut id = None;
    let mut name = None;
    let mut description = None;
    let mut cost = None;
    let mut missing = Vec::new();

    for (canonical, logical) in CANONICAL {
        let wanted = fold(canonical);
        let found = folded
            .iter()
            .position(|header| header.contains(&wanted) || wanted.contains(header.as_str()))
            .map(|pos| headers[pos].clone());

        match (found, logical) {
            (Some(header), Logical::Id) => id = Some(header),
            (Some(header), Logical::Name) => name = Some(header),
            (Some(header), Logical::Description) => description = Some(header),
            (Some(header), Logical::Cost) => cost = Some(header),
            (None, _) => missing.push(canonical.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(IngestError::UnmappedColumns {
            missing,
            available: headers.to_vec(),
        });
    }

    // All four are Some once missing is empty.
    Ok(Schema {
        id: id.unwrap_or_default(),
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        cost: cost.unwrap_or_default(),
    })
}
