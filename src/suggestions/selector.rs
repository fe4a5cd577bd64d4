// ABOUTME: Candidate ranking, empty-match fallback, and bounded random sampling
// ABOUTME: RNG is threaded in explicitly so tests can fix seeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Candidate Selector
//!
//! Ranks matched candidates, substitutes a fallback set when nothing
//! matched, and samples a bounded subset for model consumption.
//!
//! Ordering is matched count descending, then the feed-provided publish
//! date ascending with missing dates sorting last; remaining ties keep
//! feed order (the sort is stable). After ranking, the set is randomly
//! permuted and truncated — this bounds prompt size and injects variety
//! across repeated calls with identical input, a non-determinism the
//! design accepts. Production callers seed the RNG from entropy per
//! request; tests pass a fixed seed.

use crate::models::{CandidateRecipe, RawRecipe};
use crate::suggestions::normalizer;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Number of feed entries substituted when no candidate matched
pub const FALLBACK_CAP: usize = 20;

/// Maximum candidates handed to the prompt builder
pub const PROMPT_CAP: usize = 30;

/// Maximum ingredient names considered per request
pub const INGREDIENT_CAP: usize = 30;

/// Accepted keys for the feed's publish/creation date, used as the
/// secondary sort key
const PUBLISH_DAY_KEYS: &[&str] = &["recipePublishday", "recipe_publishday", "publishDay"];

/// Resolve the secondary sort key for a candidate, `None` when absent
fn publish_day(candidate: &CandidateRecipe) -> Option<&str> {
    PUBLISH_DAY_KEYS
        .iter()
        .filter_map(|key| candidate.raw.field(key))
        .filter_map(serde_json::Value::as_str)
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Rank candidates in place: matched count descending, publish date
/// ascending (missing dates last), stable by feed order otherwise.
pub fn rank_candidates(candidates: &mut [CandidateRecipe]) {
    candidates.sort_by(|a, b| {
        b.matched_count
            .cmp(&a.matched_count)
            .then_with(|| match (publish_day(a), publish_day(b)) {
                (Some(day_a), Some(day_b)) => day_a.cmp(day_b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
}

/// Cast the first `cap` feed entries to unranked candidates with a zero
/// match count; used when matching produced nothing.
#[must_use]
pub fn fallback_candidates(feed: &[RawRecipe], cap: usize) -> Vec<CandidateRecipe> {
    feed.iter()
        .take(cap)
        .map(|raw| CandidateRecipe {
            raw: raw.clone(),
            matched_count: 0,
            used_ingredients: normalizer::declared_used_ingredients(raw),
            ingredients: normalizer::material_list(raw),
        })
        .collect()
}

/// Establish the ranked-or-fallback candidate set, then shuffle and
/// truncate it to [`PROMPT_CAP`].
#[must_use]
pub fn select<R: Rng>(
    mut candidates: Vec<CandidateRecipe>,
    feed: &[RawRecipe],
    rng: &mut R,
) -> Vec<CandidateRecipe> {
    if candidates.is_empty() {
        candidates = fallback_candidates(feed, FALLBACK_CAP);
    } else {
        rank_candidates(&mut candidates);
    }

    candidates.shuffle(rng);
    candidates.truncate(PROMPT_CAP);
    candidates
}

/// Randomly down-sample an oversized ingredient list to `cap` entries.
///
/// Applied by the orchestrator before matching; lists at or under the cap
/// pass through unchanged (in their original order).
#[must_use]
pub fn downsample_ingredients<R: Rng>(
    names: Vec<String>,
    cap: usize,
    rng: &mut R,
) -> Vec<String> {
    if names.len() <= cap {
        return names;
    }
    names.choose_multiple(rng, cap).cloned().collect()
}
