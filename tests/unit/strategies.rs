//! Scoring strategy behavior on realistic normalized inputs.

use busca::{normalize, partial_token_set_ratio, token_set_ratio};

#[test]
fn token_set_is_symmetric() {
    let a = "reforma predio administrativo";
    let b = "aquisicao equipamentos informatica escritorio";
    assert_eq!(token_set_ratio(a, b), token_set_ratio(b, a));
    assert_eq!(partial_token_set_ratio(a, b), partial_token_set_ratio(b, a));
}

#[test]
fn partial_beats_whole_string_on_fragment_queries() {
    // A short query against a long field: the windowed comparison should not
    // be punished by the length difference the way a whole-string one is.
    let query = "quadra";
    let field = "construcao quadra esportiva coberta escola municipal";
    assert!(partial_token_set_ratio(query, field) >= token_set_ratio(query, field));
}

#[test]
fn normalized_pair_with_same_token_multiset_scores_100() {
    let a = normalize("Reforma do Prédio Administrativo");
    let b = normalize("Prédio Administrativo Reforma");
    assert_eq!(token_set_ratio(&a, &b), 100.0);
}

#[test]
fn unrelated_texts_score_below_any_reasonable_threshold() {
    let query = normalize("colheita de café");
    for field in [
        "desenvolvimento sistema gestao integrada prefeitura",
        "reforma completa predio administrativo central",
        "aquisicao equipamentos informatica escritorio",
    ] {
        assert!(token_set_ratio(&query, field) < 70.0);
        assert!(partial_token_set_ratio(&query, field) < 70.0);
    }
}

#[test]
fn typo_in_query_still_scores_high() {
    // One transposition inside one token.
    let score = token_set_ratio("equipamentos infromatica", "equipamentos informatica");
    assert!(score > 85.0, "typo scored {}", score);
}
