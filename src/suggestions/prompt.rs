// ABOUTME: Prompt construction embedding ingredients, condition, and candidate excerpts
// ABOUTME: Pure templating; the output-shape contract is stated inside the prompt text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Prompt Builder
//!
//! Renders the single natural-language instruction block sent to the
//! generative model. The prompt carries the hard constraint that only
//! exact-name matches of the registered ingredients may be used, soft
//! preferences for ingredient coverage and variety, a fixed target of five
//! suggestions, the user's condition, an excerpt of the top candidates as
//! supporting context, and the JSON output-shape contract the normalizer
//! later reconciles.

use crate::models::CandidateRecipe;
use crate::suggestions::normalizer;
use serde_json::json;
use std::fmt::Write;

/// Number of candidates serialized into the prompt as supporting context
pub const SAMPLE_CAP: usize = 15;

/// Number of recipes requested from the model
pub const SUGGESTION_COUNT: usize = 5;

/// Condition placeholder when the user reported nothing
const DEFAULT_CONDITION: &str = "特になし";

/// Serialize a candidate excerpt for the prompt: just enough context for
/// the model to ground its suggestions in real feed recipes
fn candidate_excerpt(candidate: &CandidateRecipe) -> serde_json::Value {
    let normalized = normalizer::normalize(&candidate.raw);
    json!({
        "recipeTitle": normalized.title,
        "recipeMaterial": candidate.ingredients,
        "recipeUrl": normalized.recipe_url,
        "recipeCost": normalized.recipe_cost,
    })
}

/// Build the model prompt.
///
/// Pure formatting: no branching logic beyond substitution and the empty
/// condition default.
#[must_use]
pub fn build_prompt(
    ingredients: &[String],
    condition: &str,
    candidates: &[CandidateRecipe],
) -> String {
    let condition = if condition.trim().is_empty() {
        DEFAULT_CONDITION
    } else {
        condition.trim()
    };

    let excerpts: Vec<serde_json::Value> = candidates
        .iter()
        .take(SAMPLE_CAP)
        .map(candidate_excerpt)
        .collect();
    let excerpt_json =
        serde_json::to_string_pretty(&excerpts).unwrap_or_else(|_| "[]".to_owned());

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "あなたは家庭料理のアシスタントです。以下の条件に従って、登録食材から作れるレシピを{SUGGESTION_COUNT}件提案してください。"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 制約（必ず守ること）");
    let _ = writeln!(
        prompt,
        "- 使用できる食材は「登録食材」に挙げた名前と完全に一致するものだけです。類似品・ブランド違い・部分一致の食材は使用しないでください。"
    );
    let _ = writeln!(prompt, "- 調味料（塩、醤油、油など）は登録がなくても使用して構いません。");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 優先事項");
    let _ = writeln!(prompt, "- 登録食材をできるだけ多く活用してください。");
    let _ = writeln!(
        prompt,
        "- {SUGGESTION_COUNT}件のレシピは、できるだけ料理のジャンルや調理法が重ならないようにしてください。"
    );
    let _ = writeln!(prompt, "- 体調に配慮したレシピを優先してください。");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 登録食材");
    let _ = writeln!(prompt, "{}", ingredients.join("、"));
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 今日の体調");
    let _ = writeln!(prompt, "{condition}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 参考レシピ候補（抜粋）");
    let _ = writeln!(prompt, "{excerpt_json}");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## 出力形式");
    let _ = writeln!(
        prompt,
        "次のフィールドを持つオブジェクトのJSON配列のみを出力してください。説明文やコードブロック記号は不要です。"
    );
    let _ = writeln!(
        prompt,
        "recipeTitle, catchCopy, foodImageUrl, recipeUrl, recipeCost, ingredients, instructions, recommendationReason, mainNutrients, cookingPoint, usedIngredients"
    );
    let _ = writeln!(
        prompt,
        "ingredients は「食材名 分量」形式の文字列の配列、instructions は手順の文字列の配列にしてください。"
    );

    prompt
}
