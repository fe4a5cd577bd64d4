// ABOUTME: The recipe suggestion pipeline from ingredient matching to canonical output
// ABOUTME: Re-exports the matcher, selector, prompt builder, normalizer, and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Suggestion Pipeline
//!
//! The core of the server: given the user's stored ingredients and latest
//! condition, produce up to five recipes in the fixed [`CanonicalRecipe`]
//! contract, regardless of whether they came from the external feed or the
//! generative model.
//!
//! Control flow for one request:
//!
//! ```text
//! FetchFeed -> Match -> Select -> BuildPrompt -> InvokeModel -> ParseModel
//!                                         -> {Normalize | Fallback} -> Respond
//! ```
//!
//! The pipeline is linear with no loops back. Feed failure is terminal;
//! model failure or unusable model output falls back to a local selection
//! built from the matched candidates.
//!
//! [`CanonicalRecipe`]: crate::models::CanonicalRecipe

/// Ingredient-to-recipe matching
pub mod matcher;
/// Field-alias resolution into the canonical recipe contract
pub mod normalizer;
/// Prompt construction for the generative model
pub mod prompt;
/// Candidate ranking, fallback, and sampling
pub mod selector;

mod orchestrator;

pub use matcher::match_candidates;
pub use normalizer::{material_list, normalize};
pub use orchestrator::{extract_json_array, parse_model_recipes, SuggestionService};
pub use prompt::build_prompt;
pub use selector::{downsample_ingredients, fallback_candidates, rank_candidates, select};
