// ABOUTME: Suggestion orchestrator sequencing feed fetch, matching, model call, and fallback
// ABOUTME: Model output is untrusted; extraction and parsing are defensive by construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Suggestion Orchestrator
//!
//! Sequences one suggestion request end to end. The state machine is
//! linear with no loops back:
//!
//! `FetchFeed -> Match -> Select -> BuildPrompt -> InvokeModel ->
//! ParseModel -> {Normalize | Fallback} -> Respond`
//!
//! - A feed fetch failure is terminal and surfaces as `FeedUnavailable`.
//! - A model invocation failure, or a model response from which no JSON
//!   array of objects can be extracted, transitions to the local fallback:
//!   shuffle the selected candidates, take five, and synthesize the
//!   canonical fields the feed record cannot provide.
//! - Model output is treated as untrusted external input: extract the
//!   first bracket-balanced array substring, parse it, then validate the
//!   element shape. Nothing downstream assumes well-formed input.

use crate::errors::{AppError, AppResult};
use crate::external::RecipeFeed;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{CandidateRecipe, CanonicalRecipe, RawRecipe};
use crate::suggestions::{matcher, normalizer, prompt, selector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Placeholder preparation step for fallback recipes
const FALLBACK_INSTRUCTIONS: &str = "手順の情報はありません。レシピページをご確認ください。";

/// Orchestrates the suggestion pipeline over a recipe feed and a
/// generative model
pub struct SuggestionService {
    feed: Arc<dyn RecipeFeed>,
    llm: Arc<dyn LlmProvider>,
}

impl SuggestionService {
    /// Create a service over the given feed and model provider
    #[must_use]
    pub fn new(feed: Arc<dyn RecipeFeed>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { feed, llm }
    }

    /// Produce recipe suggestions for the given ingredients and condition.
    ///
    /// # Errors
    ///
    /// Returns `FeedUnavailable` when the external feed cannot be fetched;
    /// model failures are recovered internally via the fallback path.
    pub async fn suggest(
        &self,
        ingredient_names: Vec<String>,
        condition: &str,
    ) -> AppResult<Vec<CanonicalRecipe>> {
        let feed = self.feed.fetch_recipes().await?;
        debug!(feed_len = feed.len(), "Fetched recipe feed");

        // Reseeded per request so repeated identical requests still vary.
        let mut rng = StdRng::from_entropy();

        let ingredient_names =
            selector::downsample_ingredients(ingredient_names, selector::INGREDIENT_CAP, &mut rng);

        let candidates = matcher::match_candidates(&ingredient_names, &feed);
        debug!(candidates = candidates.len(), "Matched candidates");

        let selected = selector::select(candidates, &feed, &mut rng);

        let prompt_text = prompt::build_prompt(&ingredient_names, condition, &selected);
        let request = ChatRequest::new(vec![ChatMessage::user(prompt_text)]);

        let model_items = match self.llm.complete(&request).await {
            Ok(response) => {
                let items = parse_model_recipes(&response.content);
                if items.is_empty() {
                    let error = AppError::model_unparseable(
                        "model response contained no parseable recipe array",
                    );
                    warn!(
                        provider = self.llm.display_name(),
                        error = %error,
                        "Falling back to local selection"
                    );
                    None
                } else {
                    Some(items)
                }
            }
            Err(error) => {
                warn!(
                    provider = self.llm.display_name(),
                    error = %error,
                    "Model invocation failed"
                );
                None
            }
        };

        let recipes = model_items.map_or_else(
            || Self::fallback_recipes(selected, &mut rng),
            |items| items.iter().map(normalizer::normalize).collect(),
        );

        info!(count = recipes.len(), "Suggestion pipeline complete");
        Ok(recipes)
    }

    /// Build the local fallback selection: shuffle the candidates, take
    /// five, and fill in the fields a bare feed record cannot provide.
    fn fallback_recipes(
        mut candidates: Vec<CandidateRecipe>,
        rng: &mut StdRng,
    ) -> Vec<CanonicalRecipe> {
        candidates.shuffle(rng);
        candidates
            .into_iter()
            .take(prompt::SUGGESTION_COUNT)
            .map(|candidate| {
                let mut recipe = normalizer::normalize(&candidate.raw);
                recipe.used_ingredients = candidate.used_ingredients;
                if recipe.instructions.is_empty() {
                    recipe.instructions = vec![FALLBACK_INSTRUCTIONS.to_owned()];
                }
                if recipe.recommendation_reason.is_empty() {
                    recipe.recommendation_reason = if recipe.used_ingredients.is_empty() {
                        "登録食材を活用できるおすすめレシピです。".to_owned()
                    } else {
                        format!(
                            "登録食材（{}）を活用できるおすすめレシピです。",
                            recipe.used_ingredients.join("、")
                        )
                    };
                }
                recipe
            })
            .collect()
    }
}

/// Extract the first bracket-balanced JSON array substring from free text.
///
/// String- and escape-aware so brackets inside string literals do not
/// unbalance the scan. Returns `None` when no complete array is present.
#[must_use]
pub fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse recipe-shaped items out of free-form model output.
///
/// Extract-then-parse-then-validate: non-array text, unparseable JSON, and
/// non-object array elements all degrade to an empty result, which the
/// orchestrator treats as "no suggestions returned".
#[must_use]
pub fn parse_model_recipes(text: &str) -> Vec<RawRecipe> {
    let Some(array_text) = extract_json_array(text) else {
        return Vec::new();
    };

    serde_json::from_str::<Vec<serde_json::Value>>(array_text)
        .map(|items| {
            items
                .into_iter()
                .filter(serde_json::Value::is_object)
                .map(RawRecipe::new)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_array_skips_prose() {
        let text = "以下が提案です。\n[{\"recipeTitle\": \"オムレツ\"}]\n以上です。";
        let extracted = extract_json_array(text).unwrap();
        assert!(extracted.starts_with('['));
        assert!(extracted.ends_with(']'));
        assert!(extracted.contains("オムレツ"));
    }

    #[test]
    fn test_extract_json_array_handles_brackets_in_strings() {
        let text = r#"[{"title": "配列の]括弧[入り"}]"#;
        let extracted = extract_json_array(text).unwrap();
        assert_eq!(extracted, text);
    }

    #[test]
    fn test_extract_json_array_rejects_unbalanced_text() {
        assert!(extract_json_array("[{\"title\": \"incomplete\"").is_none());
        assert!(extract_json_array("no array here").is_none());
    }

    #[test]
    fn test_parse_model_recipes_drops_non_objects() {
        let text = r#"[{"recipeTitle": "A"}, "stray", 42, {"recipeTitle": "B"}]"#;
        let recipes = parse_model_recipes(text);
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_parse_model_recipes_empty_on_garbage() {
        assert!(parse_model_recipes("[not json at all]").is_empty());
    }
}
