// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dedup-by-record-keep-max: one result per record, whatever produced it.
//!
//! A record can surface up to four times per query - two fields times two
//! strategies. A record should appear at most once in the result set. Sounds
//! obvious, but it's easy to mess up when merging candidate streams, so
//! `MatchMerger` enforces record-index-only deduplication at the type level:
//! the map key is `RecordIdx` and nothing else.
//!
//! **Invariant**: each record appears at most once in ranked results.
//!
//! **Verified by**: `prop_no_duplicate_records` (tests/property/rank_props.rs)

use std::collections::HashMap;

use crate::rank::ordering::compare_matches;
use crate::types::{Field, Match, RecordIdx};

/// Generic keep-the-best reducer over scored candidates.
///
/// # Merge rule
///
/// When a record arrives again:
/// 1. Keep the **higher score**, whichever field or strategy produced it.
/// 2. On an exact score tie, keep the **Description** field over Name - the
///    stated tie-break, matching the order fields are processed upstream,
///    not an accident of iteration order.
/// 3. Otherwise keep the existing entry (first wins, deterministic because
///    the pass table order is fixed).
#[derive(Debug, Default)]
pub struct MatchMerger {
    /// Best match per record. `RecordIdx` as the only key prevents the
    /// composite-key class of duplicate bugs.
    map: HashMap<RecordIdx, Match>,
}

impl MatchMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one candidate, keeping the best per record.
    pub fn merge(&mut self, candidate: Match) {
        self.map
            .entry(candidate.record)
            .and_modify(|existing| {
                if replaces(&candidate, existing) {
                    *existing = candidate;
                }
            })
            .or_insert(candidate);
    }

    /// Merge a whole candidate stream. Equivalent to calling `merge` per item.
    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = Match>) {
        for candidate in candidates {
            self.merge(candidate);
        }
    }

    /// Number of distinct records merged so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when nothing has been merged.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Convert to the final sorted result, truncated to `cap` when given.
    ///
    /// Sorted by `compare_matches`: score descending, record index ascending.
    pub fn into_sorted(self, cap: Option<usize>) -> Vec<Match> {
        let mut results: Vec<_> = self.map.into_values().collect();
        results.sort_by(compare_matches);
        if let Some(cap) = cap {
            results.truncate(cap);
        }
        results
    }
}

/// Should `candidate` replace `existing` for the same record?
fn replaces(candidate: &Match, existing: &Match) -> bool {
    if candidate.score != existing.score {
        return candidate.score > existing.score;
    }
    candidate.field.tie_rank() < existing.field.tie_rank()
}
