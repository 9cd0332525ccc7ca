// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: how ranked matches get sorted.
//!
//! Score descending, then record index ascending. The second key makes exact
//! score ties deterministic across runs - the order is not meaningful, but it
//! must be reproducible.

use std::cmp::Ordering;

use crate::types::Match;

/// Compare two matches for final ranking.
///
/// 1. **Score** - descending, higher similarity first
/// 2. **Record index** - ascending, the determinism tie-breaker
///
/// Scores are produced by the strategies and always lie in [0, 100], so the
/// partial comparison cannot actually fail; `Equal` is the safe fallback.
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.record.cmp(&b.record),
    }
}
