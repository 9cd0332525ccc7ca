// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy ranker: query in, ordered matches out.
//!
//! The whole search is a declarative pipeline over `SCORING_PASSES`, a fixed
//! table of (field, strategy) pairs. Each pass extracts the top-K candidates
//! for that pair, the threshold filter prunes them, and `MatchMerger` folds
//! everything down to one best match per record. Adding a third field or a
//! third scorer is a one-line change to the table.
//!
//! # Candidate limit caveat
//!
//! Each pass only inspects its own top `candidate_limit` provisional
//! candidates. A record ranked just outside the top-K of *every* pass is
//! missed even if it clears the threshold. That is the documented trade for
//! bounding work on large datasets, not a bug.
//!
//! # Determinism
//!
//! Two identical calls return identical ordered output. The pass table order
//! is fixed, extraction and the final sort break score ties by record index,
//! and the merger's tie-break (Description over Name) is explicit.

mod dedup;
mod ordering;

pub use dedup::MatchMerger;
pub use ordering::compare_matches;

use crate::dataset::Dataset;
use crate::normalize::normalize;
use crate::scoring::extract_top_k;
use crate::types::{Field, Hit, Match, RankOptions, Strategy};

/// The scoring pass table. Description before Name: on equal scores the
/// earlier field is the one callers see as `matched_field`.
pub const SCORING_PASSES: &[(Field, Strategy)] = &[
    (Field::Description, Strategy::TokenSet),
    (Field::Description, Strategy::PartialTokenSet),
    (Field::Name, Strategy::TokenSet),
    (Field::Name, Strategy::PartialTokenSet),
];

/// Rank a dataset's records against a free-text query.
///
/// An empty dataset is impossible (`prepare` refuses to build one), but a
/// query that normalizes to empty is fine: every strategy scores it zero and
/// the result is empty at any positive threshold. "No results" is a normal
/// outcome, never an error - this function is infallible by design.
pub fn rank(dataset: &Dataset, query: &str, options: &RankOptions) -> Vec<Match> {
    let normalized_query = normalize(query);

    let mut merger = MatchMerger::new();
    for &(field, strategy) in SCORING_PASSES {
        let candidates = extract_top_k(
            &normalized_query,
            dataset.normalized_fields(field),
            strategy,
            options.candidate_limit,
        );
        merger.merge_all(
            candidates
                .into_iter()
                .filter(|(_, score)| options.threshold_mode.accepts(*score, options.threshold))
                .map(|(record, score)| Match {
                    record,
                    score,
                    field,
                }),
        );
    }

    merger.into_sorted(options.result_cap)
}

/// Like `rank`, but resolves each match into an owned `Hit` carrying the full
/// record data - the shape the presentation layer consumes.
pub fn rank_hits(dataset: &Dataset, query: &str, options: &RankOptions) -> Vec<Hit> {
    rank(dataset, query, options)
        .into_iter()
        .map(|m| {
            let record = dataset.record(m.record);
            Hit {
                id: record.id.clone(),
                name: record.name.clone(),
                description: record.description.clone(),
                cost: record.cost,
                score: m.score,
                matched_field: m.field,
            }
        })
        .collect()
}
