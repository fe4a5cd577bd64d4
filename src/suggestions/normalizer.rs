// ABOUTME: Field normalization mapping arbitrary recipe-shaped records to the canonical contract
// ABOUTME: Ordered alias tables per field, first non-empty wins, total (never fails)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Normalizer
//!
//! Pure, total mapping from a loosely-typed [`RawRecipe`] into a
//! [`CanonicalRecipe`]. Any malformed or missing field degrades to the
//! field's empty default rather than raising.
//!
//! This function is the single seam that absorbs upstream schema drift: it
//! is applied identically to records from the external feed and to items
//! parsed out of the generative model's output.
//!
//! Each canonical field resolves through an ordered list of accepted source
//! keys; the first key whose value is non-empty after coercion wins. The
//! alias tables below are the complete, testable statement of that contract.

use crate::models::{CanonicalRecipe, RawRecipe};
use serde_json::Value;

// ============================================================================
// Alias Tables
// ============================================================================

/// Accepted keys for the recipe identifier
const RECIPE_ID_KEYS: &[&str] = &["recipeId", "recipe_id", "id"];

/// Accepted keys for the recipe title
const TITLE_KEYS: &[&str] = &["recipeTitle", "title", "recipe_title", "name"];

/// Accepted keys for the promotional description
const CATCH_COPY_KEYS: &[&str] = &[
    "catchCopy",
    "catchcopy",
    "recipeDescription",
    "catch_copy",
    "description",
];

/// Accepted keys for the image URL
const IMAGE_URL_KEYS: &[&str] = &[
    "foodImageUrl",
    "food_image_url",
    "mediumImageUrl",
    "imageUrl",
    "image_url",
];

/// Accepted keys for the recipe page URL
const RECIPE_URL_KEYS: &[&str] = &["recipeUrl", "recipe_url", "url"];

/// Accepted keys for the displayed cost
const COST_KEYS: &[&str] = &["recipeCost", "recipe_cost", "cost"];

/// Accepted keys for the material / ingredient list
const MATERIAL_KEYS: &[&str] = &[
    "recipeMaterial",
    "ingredients",
    "recipe_material",
    "materials",
    "material",
];

/// Accepted keys for the preparation steps
const INSTRUCTION_KEYS: &[&str] = &[
    "instructions",
    "recipeInstructions",
    "recipe_instructions",
    "steps",
];

/// Accepted keys for the recommendation reason
const REASON_KEYS: &[&str] = &["recommendationReason", "recommendation_reason", "reason"];

/// Accepted keys for the main nutrients
const NUTRIENT_KEYS: &[&str] = &["mainNutrients", "main_nutrients", "nutrients"];

/// Accepted keys for the cooking tip
const COOKING_POINT_KEYS: &[&str] = &["cookingPoint", "cooking_point", "point"];

/// Accepted keys for the pre-declared used-ingredients list
const USED_INGREDIENT_KEYS: &[&str] = &["usedIngredients", "used_ingredients"];

// ============================================================================
// Value Coercion
// ============================================================================

/// Coerce a scalar JSON value to a trimmed string, empty when unusable
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Split a delimited material string on `、`, `,`, `，`, or newline,
/// trimming whitespace and discarding empty segments
pub(crate) fn split_delimited(value: &str) -> Vec<String> {
    value
        .split(['、', ',', '，', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Coerce a JSON value into a list of strings: arrays element-wise, strings
/// via the delimiter split, anything else empty
fn value_to_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(s) => split_delimited(s),
        _ => Vec::new(),
    }
}

/// Resolve a string field: first key with a non-empty coerced value wins
fn resolve_string(raw: &RawRecipe, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| raw.field(key))
        .map(value_to_string)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// Resolve a list field: first key with a non-empty coerced list wins
fn resolve_list(raw: &RawRecipe, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| raw.field(key))
        .map(value_to_list)
        .find(|list| !list.is_empty())
        .unwrap_or_default()
}

// ============================================================================
// Public API
// ============================================================================

/// Resolve a recipe's material list using the same alias/split rule the
/// normalizer applies; used by the matcher
#[must_use]
pub fn material_list(raw: &RawRecipe) -> Vec<String> {
    resolve_list(raw, MATERIAL_KEYS)
}

/// Resolve a recipe's pre-declared used-ingredients list
#[must_use]
pub fn declared_used_ingredients(raw: &RawRecipe) -> Vec<String> {
    resolve_list(raw, USED_INGREDIENT_KEYS)
}

/// Map an arbitrary recipe-shaped record into the canonical contract.
///
/// Total: never fails; every output field is present, with an empty string
/// or empty sequence standing in for missing source values.
#[must_use]
pub fn normalize(raw: &RawRecipe) -> CanonicalRecipe {
    CanonicalRecipe {
        recipe_id: resolve_string(raw, RECIPE_ID_KEYS),
        title: resolve_string(raw, TITLE_KEYS),
        catch_copy: resolve_string(raw, CATCH_COPY_KEYS),
        food_image_url: resolve_string(raw, IMAGE_URL_KEYS),
        recipe_url: resolve_string(raw, RECIPE_URL_KEYS),
        recipe_cost: resolve_string(raw, COST_KEYS),
        ingredients: resolve_list(raw, MATERIAL_KEYS),
        instructions: resolve_list(raw, INSTRUCTION_KEYS),
        recommendation_reason: resolve_string(raw, REASON_KEYS),
        main_nutrients: resolve_list(raw, NUTRIENT_KEYS),
        cooking_point: resolve_string(raw, COOKING_POINT_KEYS),
        used_ingredients: resolve_list(raw, USED_INGREDIENT_KEYS),
    }
}
