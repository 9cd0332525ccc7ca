// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity scoring: how a query and a record field get their number.
//!
//! Two layers. `strategies` turns the low-level edit-distance primitive
//! (`strsim`) into the two token-based scorers the ranker iterates over;
//! `extract` is the best-K extraction that bounds how many candidates each
//! scoring pass inspects deeply.
//!
//! Every score is in [0, 100]. Empty normalized text on either side scores
//! zero - a degenerate query doesn't error, it just matches nothing.

mod extract;
mod strategies;

pub use extract::extract_top_k;
pub use strategies::{partial_token_set_ratio, token_set_ratio};
