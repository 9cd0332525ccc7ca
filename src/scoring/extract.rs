// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-K extraction: the primitive each scoring pass is built on.
//!
//! Scores every candidate with one strategy, keeps the top `limit` by score.
//! Ties are broken by ascending record index so that repeated runs on the same
//! input produce the same provisional candidate set - the ranker's
//! determinism guarantee starts here.

use std::cmp::Ordering;

use crate::types::{RecordIdx, Strategy};

/// Extract the `limit` best-scoring candidates for `query` under `strategy`.
///
/// Returns `(record, score)` pairs sorted score-descending, index-ascending.
/// No threshold is applied here; filtering is the caller's concern.
pub fn extract_top_k<'a, I>(
    query: &str,
    candidates: I,
    strategy: Strategy,
    limit: usize,
) -> Vec<(RecordIdx, f64)>
where
    I: IntoIterator<Item = (RecordIdx, &'a str)>,
{
    let mut scored: Vec<(RecordIdx, f64)> = candidates
        .into_iter()
        .map(|(idx, text)| (idx, strategy.score(query, text)))
        .collect();

    scored.sort_by(|a, b| match b.1.partial_cmp(&a.1) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.0.cmp(&b.0),
    });
    scored.truncate(limit);
    scored
}
