// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two token-based scoring strategies.
//!
//! Both expect **normalized** token strings (see `normalize`) and return a
//! similarity in [0, 100]. The underlying character-level primitive is
//! `strsim::normalized_levenshtein`; this module only composes it, it never
//! re-derives edit distance.
//!
//! # Token-set construction
//!
//! Given token strings `a` and `b`, split each into a sorted set of unique
//! tokens and build three comparison strings:
//!
//! ```text
//! t0 = sorted(a ∩ b)
//! t1 = sorted(a ∩ b) + sorted(a \ b)
//! t2 = sorted(a ∩ b) + sorted(b \ a)
//! ```
//!
//! The strategy score is the best pairwise comparison among them. Because t0
//! is a prefix of both t1 and t2, a query whose tokens are all contained in
//! the field scores 100 regardless of word order or repetition.
//!
//! `TokenSet` compares whole strings; `PartialTokenSet` compares via the best
//! fixed-width character window of the longer string (partial containment).

use std::collections::BTreeSet;

use crate::types::Strategy;

impl Strategy {
    /// Score a normalized query against one normalized field value.
    #[inline]
    pub fn score(self, query: &str, field: &str) -> f64 {
        match self {
            Strategy::TokenSet => token_set_ratio(query, field),
            Strategy::PartialTokenSet => partial_token_set_ratio(query, field),
        }
    }
}

/// Order- and duplicate-insensitive token overlap, in [0, 100].
///
/// Identical token multisets score 100 even when word order differs.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, ratio)
}

/// Token-set comparison using best partial containment, in [0, 100].
///
/// Useful when the query is a fragment of a much longer field: the whole-string
/// comparison punishes the length difference, the windowed one doesn't.
pub fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    token_set_with(a, b, partial_ratio)
}

/// Shared token-set scaffolding, parameterized by the string comparator.
fn token_set_with(a: &str, b: &str, cmp: fn(&str, &str) -> f64) -> f64 {
    // Empty normalized text never matches anything. This covers degenerate
    // queries and records whose fields were filtered down to nothing.
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a: BTreeSet<&str> = a.split(' ').collect();
    let tokens_b: BTreeSet<&str> = b.split(' ').collect();

    let intersection = join(tokens_a.intersection(&tokens_b));
    let diff_a = join(tokens_a.difference(&tokens_b));
    let diff_b = join(tokens_b.difference(&tokens_a));

    let t0 = intersection.clone();
    let t1 = concat(&intersection, &diff_a);
    let t2 = concat(&intersection, &diff_b);

    cmp(&t0, &t1)
        .max(cmp(&t0, &t2))
        .max(cmp(&t1, &t2))
        .clamp(0.0, 100.0)
}

/// Whole-string similarity via normalized Levenshtein, in [0, 100].
///
/// Two empty strings score zero here, not 100: inside the token-set scaffold
/// an empty side means "no overlap", and rewarding it would let records with
/// empty fields outrank real matches.
fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best-window similarity: slide a window the length of the shorter string
/// across the longer one and keep the best whole-window ratio.
///
/// An exact substring alignment scores 100. Windows advance one character at
/// a time, so the alignment search is exhaustive over window starts.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    if shorter.is_empty() {
        return 0.0;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    let short_len = shorter.chars().count();

    let mut best = 0.0_f64;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        let score = strsim::normalized_levenshtein(shorter, &window) * 100.0;
        if score > best {
            best = score;
            // Can't beat a perfect window.
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn join<'a>(tokens: impl Iterator<Item = &'a &'a str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

fn concat(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}
