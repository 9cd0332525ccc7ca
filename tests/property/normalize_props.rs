//! Properties of the normalization pipeline.

use busca::{normalize, partial_token_set_ratio, token_set_ratio};
use proptest::prelude::*;

proptest! {
    /// One pass already produces the canonical form.
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Output shape: space-separated, purely alphabetic lowercase tokens,
    /// no leading/trailing/double spaces.
    #[test]
    fn normalize_output_is_canonical(input in ".*") {
        let out = normalize(&input);
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        for token in out.split(' ').filter(|t| !t.is_empty()) {
            prop_assert!(token.chars().all(char::is_alphabetic), "token '{}'", token);
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    /// Scores stay in [0, 100] for arbitrary inputs, normalized or not.
    #[test]
    fn scores_are_bounded(a in ".*", b in ".*") {
        for score in [token_set_ratio(&a, &b), partial_token_set_ratio(&a, &b)] {
            prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
        }
    }

    /// Both strategies are symmetric in their arguments.
    #[test]
    fn scoring_is_symmetric(a in crate::phrase_strategy(), b in crate::phrase_strategy()) {
        let a = normalize(&a);
        let b = normalize(&b);
        prop_assert_eq!(token_set_ratio(&a, &b), token_set_ratio(&b, &a));
        prop_assert_eq!(
            partial_token_set_ratio(&a, &b),
            partial_token_set_ratio(&b, &a)
        );
    }

    /// Shuffling word order never changes a token-set score against itself.
    #[test]
    fn token_set_ignores_order(phrase in crate::phrase_strategy()) {
        let forward = normalize(&phrase);
        let reversed = forward.split(' ').rev().collect::<Vec<_>>().join(" ");
        if !forward.is_empty() {
            prop_assert_eq!(token_set_ratio(&forward, &reversed), 100.0);
        }
    }
}
