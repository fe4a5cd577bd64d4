// ABOUTME: Candidate matching between stored ingredient names and feed recipes
// ABOUTME: Substring containment, hard zero-match filter, distinct match counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Candidate Matcher
//!
//! Finds feed recipes containing at least one of the user's stored
//! ingredients and annotates them with the match count and the set of
//! ingredients they use.
//!
//! The match rule is asymmetric: a stored ingredient name matches a recipe
//! when it equals, or is a substring of, at least one material entry
//! (ingredient-in-material, never material-in-ingredient). "卵" therefore
//! matches the material "卵 2個". Recipes with zero matches are dropped
//! entirely: this is a hard filter, not a ranking penalty.

use crate::models::{CandidateRecipe, RawRecipe};
use crate::suggestions::normalizer;

/// Match stored ingredient names against the raw feed.
///
/// `matched_count` is the number of distinct stored ingredients matched,
/// not the occurrence count. `used_ingredients` is the union of the
/// recipe's pre-declared used-ingredients field and the matched names,
/// deduplicated.
///
/// An empty ingredient list matches nothing, so the result is empty and
/// the selector's fallback path takes over.
#[must_use]
pub fn match_candidates(
    ingredient_names: &[String],
    feed: &[RawRecipe],
) -> Vec<CandidateRecipe> {
    let mut candidates = Vec::new();

    for raw in feed {
        let materials = normalizer::material_list(raw);
        if materials.is_empty() {
            continue;
        }

        let mut matched: Vec<&str> = Vec::new();
        for name in ingredient_names {
            if name.is_empty() || matched.contains(&name.as_str()) {
                continue;
            }
            if materials.iter().any(|material| material.contains(name.as_str())) {
                matched.push(name);
            }
        }

        if matched.is_empty() {
            continue;
        }

        let mut used_ingredients = normalizer::declared_used_ingredients(raw);
        for name in &matched {
            if !used_ingredients.iter().any(|used| used == name) {
                used_ingredients.push((*name).to_owned());
            }
        }

        candidates.push(CandidateRecipe {
            raw: raw.clone(),
            matched_count: matched.len(),
            used_ingredients,
            ingredients: materials,
        });
    }

    candidates
}
