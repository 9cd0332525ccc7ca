//! Realistic search scenarios over the shared municipal project fixtures.

use busca::dataset::{prepare, DatasetError};
use busca::testing::{row, test_schema};
use busca::types::{Field, RankOptions, ThresholdMode};
use busca::{rank, rank_hits, token_set_ratio};
use serde_json::Value;

use crate::common::projects_dataset;

#[test]
fn exact_substring_query_scores_high() {
    let dataset = projects_dataset();
    let options = RankOptions {
        threshold: 50.0,
        ..RankOptions::default()
    };
    let hits = rank_hits(&dataset, "equipamentos de informática", &options);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].id, "P-003");
    assert!(hits[0].score >= 90.0, "score was {}", hits[0].score);
    assert_eq!(hits[0].matched_field, Field::Description);
}

#[test]
fn off_topic_query_finds_nothing_at_default_threshold() {
    let dataset = projects_dataset();
    let results = rank(&dataset, "colheita de café", &RankOptions::default());
    assert!(results.is_empty());
}

#[test]
fn stopwords_and_word_order_do_not_matter() {
    // Both sides normalize to the same token set, so the score is exact.
    let a = busca::normalize("a reforma do prédio administrativo");
    let b = busca::normalize("administrativo prédio reforma");
    assert_eq!(token_set_ratio(&a, &b), 100.0);

    let dataset = projects_dataset();
    let shuffled = rank(
        &dataset,
        "administrativo do prédio reforma",
        &RankOptions::default(),
    );
    let natural = rank(
        &dataset,
        "reforma do prédio administrativo",
        &RankOptions::default(),
    );
    assert_eq!(shuffled[0].record, natural[0].record);
    assert_eq!(shuffled[0].score, natural[0].score);
}

#[test]
fn accented_and_unaccented_queries_are_equivalent() {
    let dataset = projects_dataset();
    let accented = rank(&dataset, "rede elétrica", &RankOptions::default());
    let plain = rank(&dataset, "rede eletrica", &RankOptions::default());
    assert_eq!(accented, plain);
    assert!(!accented.is_empty());
}

#[test]
fn strict_threshold_drops_boundary_scores() {
    let dataset = projects_dataset();
    let inclusive = RankOptions {
        threshold: 100.0,
        ..RankOptions::default()
    };
    let strict = RankOptions {
        threshold: 100.0,
        threshold_mode: ThresholdMode::Strict,
        ..RankOptions::default()
    };
    // A perfect token-set match scores exactly 100, which only the
    // inclusive policy keeps.
    let query = "quadra esportiva coberta na escola municipal";
    assert!(!rank(&dataset, query, &inclusive).is_empty());
    assert!(rank(&dataset, query, &strict).is_empty());
}

#[test]
fn result_cap_limits_a_broad_query() {
    let dataset = projects_dataset();
    let options = RankOptions {
        threshold: 0.0,
        result_cap: Some(2),
        ..RankOptions::default()
    };
    let results = rank(&dataset, "municipal", &options);
    assert_eq!(results.len(), 2);
    assert!(results[0].score >= results[1].score);
}

#[test]
fn rows_missing_every_cost_fail_preparation() {
    let mut rows = vec![
        row("1", "Obra A", "reforma geral", 0.0),
        row("2", "Obra B", "pintura externa", 0.0),
    ];
    for r in &mut rows {
        r.insert("cost".to_string(), Value::Null);
    }
    assert!(matches!(
        prepare(&rows, &test_schema()),
        Err(DatasetError::EmptyAfterCleaning)
    ));
}

#[test]
fn hits_serialize_to_json_with_snake_case_fields() {
    let dataset = projects_dataset();
    let hits = rank_hits(&dataset, "portal de transparência", &RankOptions::default());
    assert!(!hits.is_empty());
    let json = serde_json::to_value(&hits[0]).unwrap();
    assert_eq!(json["id"], "P-006");
    assert_eq!(json["matched_field"], "description");
    assert!(json["score"].as_f64().unwrap() >= 70.0);
}
