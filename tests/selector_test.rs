// ABOUTME: Unit tests for candidate ranking, fallback, and sampling
// ABOUTME: Uses seeded RNGs so random steps stay deterministic under test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::feed_recipe;
use okawari_server::models::{CandidateRecipe, RawRecipe};
use okawari_server::suggestions::{
    fallback_candidates, match_candidates, rank_candidates, select,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn candidate_with_count(matched_count: usize) -> CandidateRecipe {
    CandidateRecipe {
        raw: feed_recipe(&format!("recipe-{matched_count}"), &["材料"]),
        matched_count,
        used_ingredients: Vec::new(),
        ingredients: vec!["材料".to_owned()],
    }
}

#[test]
fn test_ranking_orders_by_matched_count_descending() {
    let mut candidates = vec![
        candidate_with_count(1),
        candidate_with_count(3),
        candidate_with_count(2),
    ];
    rank_candidates(&mut candidates);

    let counts: Vec<usize> = candidates.iter().map(|c| c.matched_count).collect();
    assert_eq!(counts, vec![3, 2, 1]);
}

#[test]
fn test_ranking_ties_keep_feed_order() {
    let mut candidates = vec![
        CandidateRecipe {
            raw: feed_recipe("first", &["材料"]),
            matched_count: 2,
            used_ingredients: Vec::new(),
            ingredients: Vec::new(),
        },
        CandidateRecipe {
            raw: feed_recipe("second", &["材料"]),
            matched_count: 2,
            used_ingredients: Vec::new(),
            ingredients: Vec::new(),
        },
    ];
    rank_candidates(&mut candidates);

    let first_title = candidates[0].raw.field("recipeTitle").and_then(|v| v.as_str());
    assert_eq!(first_title, Some("first"));
}

#[test]
fn test_empty_match_fallback_takes_first_twenty_feed_entries() {
    let feed: Vec<RawRecipe> = (0..25)
        .map(|i| feed_recipe(&format!("recipe-{i}"), &["にんじん"]))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let selected = select(Vec::new(), &feed, &mut rng);
    assert_eq!(selected.len(), 20);
    assert!(selected.iter().all(|c| c.matched_count == 0));
}

#[test]
fn test_fallback_is_bounded_by_feed_length() {
    let feed = vec![
        feed_recipe("a", &["にんじん"]),
        feed_recipe("b", &["じゃがいも"]),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let selected = select(Vec::new(), &feed, &mut rng);
    assert_eq!(selected.len(), 2);

    let fallback = fallback_candidates(&feed, 20);
    assert_eq!(fallback.len(), 2);
}

#[test]
fn test_select_preserves_candidates_when_matches_exist() {
    let feed = vec![
        feed_recipe("回鍋肉", &["キャベツ", "豚肉"]),
        feed_recipe("にんじんしりしり", &["にんじん"]),
    ];
    let names = vec!["キャベツ".to_owned()];
    let candidates = match_candidates(&names, &feed);
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let selected = select(candidates, &feed, &mut rng);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].matched_count, 1);
}
