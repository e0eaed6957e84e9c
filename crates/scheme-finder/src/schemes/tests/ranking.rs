use super::common::*;
use serde_json::json;

use crate::schemes::domain::{Scheme, SchemeId};
use crate::schemes::evaluation::{MatchLevel, MatchPolicy};
use crate::schemes::ranking::{filter_by_category, rank, RecommendationRanker};

fn high_scheme(id: i64, name: &str) -> Scheme {
    scheme(
        id,
        name,
        "agriculture",
        json!({ "maxIncome": 500000, "occupations": ["farmer"], "residenceTypes": ["rural"] }),
    )
}

fn low_scheme(id: i64, name: &str) -> Scheme {
    scheme(
        id,
        name,
        "women",
        json!({ "gender": "female", "requiresBPL": true }),
    )
}

fn ids(ranked: &[crate::schemes::RankedScheme]) -> Vec<SchemeId> {
    ranked.iter().map(|entry| entry.scheme.id).collect()
}

#[test]
fn equal_levels_keep_catalog_order() {
    let catalog = vec![
        high_scheme(1, "Alpha"),
        low_scheme(2, "Bravo"),
        high_scheme(3, "Charlie"),
    ];

    let ranked = rank(&farmer_profile(), &catalog);

    assert_eq!(ids(&ranked), vec![SchemeId(1), SchemeId(3), SchemeId(2)]);
    assert_eq!(ranked[0].eligibility.match_level, MatchLevel::High);
    assert_eq!(ranked[1].eligibility.match_level, MatchLevel::High);
    assert_eq!(ranked[2].eligibility.match_level, MatchLevel::Low);
}

#[test]
fn levels_are_ordered_high_medium_low() {
    let medium = scheme(
        4,
        "Delta",
        "agriculture",
        json!({ "maxIncome": 800000, "occupations": ["farmer"] }),
    );
    let catalog = vec![low_scheme(1, "Alpha"), medium, high_scheme(2, "Echo")];

    let ranked = rank(&farmer_profile(), &catalog);
    let levels: Vec<_> = ranked
        .iter()
        .map(|entry| entry.eligibility.match_level)
        .collect();

    assert_eq!(
        levels,
        vec![MatchLevel::High, MatchLevel::Medium, MatchLevel::Low]
    );
}

#[test]
fn nothing_is_filtered_and_catalog_is_untouched() {
    let catalog = vec![
        low_scheme(1, "Alpha"),
        scheme(2, "Bravo", "housing", serde_json::Value::Null),
        low_scheme(3, "Charlie"),
    ];
    let before = catalog.clone();

    let ranked = rank(&farmer_profile(), &catalog);

    assert_eq!(ranked.len(), catalog.len());
    assert_eq!(catalog, before);
    assert_eq!(ranked[0].scheme, catalog[0]);
}

#[test]
fn empty_catalog_ranks_to_empty_list() {
    assert!(rank(&farmer_profile(), &[]).is_empty());
}

#[test]
fn ranking_is_deterministic() {
    let catalog = crate::schemes::CatalogSnapshot::standard().schemes;
    let profile = farmer_profile();

    assert_eq!(rank(&profile, &catalog), rank(&profile, &catalog));
}

#[test]
fn ranker_honours_custom_policy() {
    let catalog = vec![scheme(
        1,
        "Alpha",
        "agriculture",
        json!({ "maxIncome": 800000, "occupations": ["farmer"] }),
    )];

    let strict = RecommendationRanker::default().rank(&farmer_profile(), &catalog);
    let lenient =
        RecommendationRanker::with_policy(MatchPolicy::new(2, 0)).rank(&farmer_profile(), &catalog);

    assert_eq!(strict[0].eligibility.match_level, MatchLevel::Medium);
    assert_eq!(lenient[0].eligibility.match_level, MatchLevel::High);
}

#[test]
fn ranked_entries_serialize_scheme_alongside_eligibility() {
    let ranked = rank(&farmer_profile(), &[high_scheme(1, "Alpha")]);

    let payload = serde_json::to_value(&ranked[0]).expect("serializes");

    assert_eq!(payload["scheme"]["name"], "Alpha");
    assert_eq!(payload["eligibility"]["matchLevel"], "high");
    assert!(payload["scheme"].get("eligibility").is_none());
}

#[test]
fn category_filter_keeps_rank_order() {
    let catalog = vec![
        low_scheme(1, "Alpha"),
        high_scheme(2, "Bravo"),
        scheme(3, "Charlie", "housing", serde_json::Value::Null),
    ];
    let ranked = rank(&farmer_profile(), &catalog);

    let women = filter_by_category(ranked.clone(), Some(" WOMEN "));
    assert_eq!(ids(&women), vec![SchemeId(1)]);
    assert_eq!(filter_by_category(ranked.clone(), Some("all")).len(), 3);
    assert_eq!(filter_by_category(ranked.clone(), None).len(), 3);
    assert!(filter_by_category(ranked, Some("transport")).is_empty());
}
