// ABOUTME: Unit tests for the recipe normalizer
// ABOUTME: Validates totality, alias equivalence, and delimiter splitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use okawari_server::models::RawRecipe;
use okawari_server::suggestions::{material_list, normalize};
use serde_json::json;

#[test]
fn test_totality_on_empty_object() {
    let recipe = normalize(&RawRecipe::new(json!({})));
    assert_eq!(recipe.recipe_id, "");
    assert_eq!(recipe.title, "");
    assert_eq!(recipe.catch_copy, "");
    assert_eq!(recipe.food_image_url, "");
    assert_eq!(recipe.recipe_url, "");
    assert_eq!(recipe.recipe_cost, "");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
    assert_eq!(recipe.recommendation_reason, "");
    assert!(recipe.main_nutrients.is_empty());
    assert_eq!(recipe.cooking_point, "");
    assert!(recipe.used_ingredients.is_empty());
}

#[test]
fn test_totality_on_non_object_values() {
    // Arrays, strings, and null in place of an object must not panic.
    for value in [json!(null), json!("text"), json!([1, 2, 3]), json!(17)] {
        let recipe = normalize(&RawRecipe::new(value));
        assert_eq!(recipe.title, "");
        assert!(recipe.ingredients.is_empty());
    }
}

#[test]
fn test_title_alias_equivalence() {
    for key in ["title", "recipeTitle", "recipe_title"] {
        let recipe = normalize(&RawRecipe::new(json!({ key: "X" })));
        assert_eq!(recipe.title, "X", "alias {key} should resolve to title");
    }
}

#[test]
fn test_material_split_on_mixed_delimiters() {
    let raw = RawRecipe::new(json!({"recipeMaterial": "卵、牛乳,砂糖"}));
    let recipe = normalize(&raw);
    assert_eq!(recipe.ingredients, vec!["卵", "牛乳", "砂糖"]);
}

#[test]
fn test_material_split_trims_and_drops_empty_segments() {
    let raw = RawRecipe::new(json!({"recipeMaterial": " 卵 、、 牛乳 \n砂糖\n"}));
    assert_eq!(material_list(&raw), vec!["卵", "牛乳", "砂糖"]);
}

#[test]
fn test_used_ingredients_resolved_independently_of_materials() {
    let raw = RawRecipe::new(json!({
        "recipeMaterial": ["キャベツ", "豚肉"],
        "usedIngredients": "キャベツ、卵"
    }));
    let recipe = normalize(&raw);
    assert_eq!(recipe.ingredients, vec!["キャベツ", "豚肉"]);
    assert_eq!(recipe.used_ingredients, vec!["キャベツ", "卵"]);
}

#[test]
fn test_model_vocabulary_and_feed_vocabulary_converge() {
    // The same normalizer absorbs both upstream shapes.
    let from_feed = normalize(&RawRecipe::new(json!({
        "recipeTitle": "野菜炒め",
        "foodImageUrl": "https://img.example/a.jpg",
        "recipeMaterial": "キャベツ、豚肉"
    })));
    let from_model = normalize(&RawRecipe::new(json!({
        "title": "野菜炒め",
        "imageUrl": "https://img.example/a.jpg",
        "ingredients": ["キャベツ", "豚肉"]
    })));
    assert_eq!(from_feed.title, from_model.title);
    assert_eq!(from_feed.food_image_url, from_model.food_image_url);
    assert_eq!(from_feed.ingredients, from_model.ingredients);
}

#[test]
fn test_instructions_accept_array_form() {
    let raw = RawRecipe::new(json!({
        "instructions": ["キャベツを切る", "豚肉を炒める"]
    }));
    let recipe = normalize(&raw);
    assert_eq!(recipe.instructions.len(), 2);
}
