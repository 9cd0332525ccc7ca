// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a fuzzy search over project records.
//!
//! These types define how records, scored matches, and ranking options fit
//! together. The engine works on one `Dataset` at a time and produces
//! transient `Match` values per query; nothing here is persisted.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **RecordIdx**: `idx < dataset.len()`. Every match points at a real record.
//!   Record identity for deduplication is the index, never the `id` string -
//!   source data may reuse ids, and resolving those collisions is not this
//!   engine's job.
//!
//! - **Match**: `0.0 <= score <= 100.0`, and a result set holds at most one
//!   Match per `RecordIdx` (enforced by `rank::MatchMerger`).
//!
//! - **Record**: `cost` is finite and non-negative. `dataset::prepare` rejects
//!   anything else before a Match can ever reference it.

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES: Type-safe record identity
// =============================================================================

/// Type-safe index of a record within its `Dataset`.
///
/// Prevents accidentally passing a score cast or a row number from the raw
/// file where a record position is expected. This is the dedup key: two
/// scored candidates with the same `RecordIdx` collapse to one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordIdx(pub u32);

impl RecordIdx {
    /// Create a new RecordIdx, validating it's within bounds.
    #[inline]
    pub fn new(idx: u32, num_records: usize) -> Option<Self> {
        if (idx as usize) < num_records {
            Some(RecordIdx(idx))
        } else {
            None
        }
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RecordIdx {
    fn from(idx: u32) -> Self {
        RecordIdx(idx)
    }
}

impl From<RecordIdx> for usize {
    fn from(idx: RecordIdx) -> Self {
        idx.0 as usize
    }
}

// =============================================================================
// RECORDS AND MATCHES
// =============================================================================

/// One project entry, as it survives dataset preparation.
///
/// `id` is opaque and preserved verbatim from the source file - never
/// generated, never parsed. `cost` has already been validated as a finite,
/// non-negative number by `dataset::prepare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
}

/// Which text field of a record produced a match.
///
/// The enum order matters: `Description` outranks `Name` when a record scores
/// identically through both fields (the tie-break follows the order fields are
/// processed in the scoring pass table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Description,
    Name,
}

impl Field {
    /// Precedence used when a record ties across fields. Lower wins.
    #[inline]
    pub(crate) fn tie_rank(self) -> u8 {
        match self {
            Field::Description => 0,
            Field::Name => 1,
        }
    }
}

/// The scoring strategy that produced a candidate score.
///
/// Both operate on normalized token strings and return a similarity in
/// [0, 100]. See `scoring::strategies` for the exact semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Order- and duplicate-insensitive token overlap.
    TokenSet,
    /// Best partial containment of one token string within the other.
    PartialTokenSet,
}

/// One scored association between a query and a record.
///
/// Transient: created during `rank`, handed to the caller, never stored.
/// **Invariant**: at most one Match per `record` in a result set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Index of the matched record in its Dataset.
    pub record: RecordIdx,
    /// Similarity in [0, 100].
    pub score: f64,
    /// The field whose score was retained after cross-field dedup.
    pub field: Field,
}

/// Owned projection of a Match for callers that don't want to hold the
/// Dataset: the full record data plus score and matched field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub score: f64,
    pub matched_field: Field,
}

// =============================================================================
// RANKING OPTIONS
// =============================================================================

/// How a candidate score is compared against the threshold.
///
/// Both variants are legitimate. A slider UI reads naturally as "at least
/// this similar" (inclusive); a hard cutoff reads as "strictly better than"
/// (strict). The policy is a knob, not a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// Keep candidates with `score >= threshold` (the default).
    #[default]
    Inclusive,
    /// Keep candidates with `score > threshold`.
    Strict,
}

impl ThresholdMode {
    /// Does `score` clear `threshold` under this policy?
    #[inline]
    pub fn accepts(self, score: f64, threshold: f64) -> bool {
        match self {
            ThresholdMode::Inclusive => score >= threshold,
            ThresholdMode::Strict => score > threshold,
        }
    }
}

/// Default number of provisional candidates inspected per (field, strategy)
/// pass before threshold filtering.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Query configuration for `rank`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// Minimum acceptable similarity in [0, 100].
    pub threshold: f64,
    /// Inclusive or strict threshold comparison.
    pub threshold_mode: ThresholdMode,
    /// Candidates considered per (field, strategy) pass. This bounds work on
    /// large datasets; it is NOT the final result cap.
    pub candidate_limit: usize,
    /// Maximum number of results returned, `None` for unbounded.
    pub result_cap: Option<usize>,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            threshold: 70.0,
            threshold_mode: ThresholdMode::Inclusive,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            result_cap: Some(10),
        }
    }
}
