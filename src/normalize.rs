// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization: the canonical form every comparison runs on.
//!
//! Queries and record fields go through the same pipeline, so matching is
//! case-, accent-, punctuation-, and stopword-insensitive:
//!
//! 1. NFD normalize and drop combining marks ("aquisição" → "aquisicao")
//! 2. Lowercase
//! 3. Split on non-alphanumeric boundaries (collapses whitespace and
//!    detaches punctuation in one step)
//! 4. Drop stopword tokens (see `stopwords`)
//! 5. Drop tokens containing any non-alphabetic character
//! 6. Rejoin surviving tokens with single spaces, original order preserved
//!
//! The output is idempotent: one pass already yields the canonical form, so
//! `normalize(normalize(x)) == normalize(x)`. The output may be empty - an
//! input of pure stopwords or punctuation normalizes to "". Callers must
//! tolerate that; empty fields still participate in scoring and simply score
//! zero against non-empty queries.

use unicode_normalization::UnicodeNormalization;

use crate::stopwords;

/// Normalize text for fuzzy comparison.
///
/// Pure function of the input and the process-wide stopword set. See the
/// module docs for the exact step order.
pub fn normalize(value: &str) -> String {
    fold(value)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| !stopwords::is_stopword(token))
        .filter(|token| token.chars().all(char::is_alphabetic))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Case-fold and strip diacritics, nothing else. Shared with the ingestion
/// layer's column matching, which must not drop stopwords ("ID do Projeto"
/// needs its "do").
pub(crate) fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̃ (tilde), ̧ (cedilla)
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    // This covers the most common combining diacritical marks
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
