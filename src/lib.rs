//! Fuzzy search and ranking over tabular project datasets.
//!
//! This crate takes a table of projects (id, name, description, cost) and
//! returns the entries whose name or description best matches a free-text
//! query, ranked by similarity. Matching is case-, accent-, word-order- and
//! stopword-insensitive.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  ingest.rs   │────▶│  dataset.rs   │────▶│   rank.rs    │
//! │ (load_table, │     │  (prepare,    │     │ (rank, pass  │
//! │ map_columns) │     │   Dataset)    │     │ table, dedup)│
//! └──────────────┘     └───────────────┘     └──────────────┘
//!                             │                     │
//!                             ▼                     ▼
//!                      ┌───────────────┐     ┌──────────────┐
//!                      │ normalize.rs  │     │  scoring/    │
//!                      │ (+ stopwords) │     │ (strategies, │
//!                      │               │     │  extract)    │
//!                      └───────────────┘     └──────────────┘
//! ```
//!
//! Everything left of `rank` runs once per dataset load; `rank` runs once per
//! query. All state is in memory, a Dataset is immutable after `prepare`, and
//! ranking is pure and deterministic: the same Dataset and query always
//! produce the same ordered result, tie order included.
//!
//! # Usage
//!
//! ```ignore
//! use busca::{prepare, rank_hits, RankOptions};
//!
//! let dataset = prepare(&rows, &schema)?;
//! let hits = rank_hits(&dataset, "reforma do prédio", &RankOptions::default());
//! ```

// Module declarations
pub mod dataset;
pub mod ingest;
pub mod normalize;
pub mod rank;
pub mod scoring;
pub mod stopwords;
pub mod testing;
pub mod types;

// Re-exports for public API
pub use dataset::{prepare, Dataset, DatasetError, RawRow, Schema};
pub use ingest::{load_table, map_columns, typed_rows, IngestError, RawTable};
pub use normalize::normalize;
pub use rank::{compare_matches, rank, rank_hits, MatchMerger, SCORING_PASSES};
pub use scoring::{extract_top_k, partial_token_set_ratio, token_set_ratio};
pub use stopwords::stopword_set;
pub use types::{
    Field, Hit, Match, RankOptions, Record, RecordIdx, Strategy, ThresholdMode,
    DEFAULT_CANDIDATE_LIMIT,
};
