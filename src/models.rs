// ABOUTME: Common data structures for ingredients, conditions, and recipe records
// ABOUTME: Defines the canonical recipe contract and the transient candidate shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Core data structures shared across the storage layer, the suggestion
//! pipeline, and the HTTP interface.
//!
//! The central entity is [`CanonicalRecipe`]: the fixed-shape recipe record
//! this system guarantees in all responses, regardless of whether a recipe
//! originated from the external feed or from the generative model. A missing
//! source value becomes an empty string or empty sequence, never null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Ingredients & Conditions
// ============================================================================

/// Kind of expiry date attached to a stored ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryType {
    /// Best-before date (quality bound)
    #[serde(rename = "賞味期限")]
    BestBefore,
    /// Use-by date (safety bound)
    #[serde(rename = "消費期限")]
    UseBy,
}

impl ExpiryType {
    /// The label stored and displayed for this expiry type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BestBefore => "賞味期限",
            Self::UseBy => "消費期限",
        }
    }

    /// Parse from the stored label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "賞味期限" => Some(Self::BestBefore),
            "消費期限" => Some(Self::UseBy),
            _ => None,
        }
    }
}

impl fmt::Display for ExpiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored food item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// Row ID, absent until stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Ingredient name (e.g. "キャベツ")
    pub name: String,
    /// Free-form quantity (e.g. "1玉", "200g")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Expiry date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Which kind of expiry the date represents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_type: Option<ExpiryType>,
}

/// A self-reported physical condition entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    /// Row ID, absent until stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Free-text condition (e.g. "元気", "少し疲れている")
    pub status: String,
    /// Entry timestamp; list retrieval is ordered by this, newest first
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Recipes
// ============================================================================

/// A loosely-typed recipe record as received from the external feed or the
/// generative model.
///
/// The schema is not controlled by this system: the ingredient list may
/// appear under any of several field names, as a delimited string or as an
/// array, and any field may be missing. [`crate::suggestions::normalize`]
/// is the single seam that absorbs this drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecipe(pub serde_json::Value);

impl RawRecipe {
    /// Wrap a JSON value as a raw recipe
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Look up a field by exact key, `None` when absent or not an object
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }
}

/// The fixed-shape recipe record returned to clients.
///
/// Every field is guaranteed present: a missing source value degrades to an
/// empty string or empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanonicalRecipe {
    /// Feed-assigned recipe identifier
    pub recipe_id: String,
    /// Recipe title
    pub title: String,
    /// Short promotional description
    pub catch_copy: String,
    /// Image URL
    pub food_image_url: String,
    /// Link to the full recipe
    pub recipe_url: String,
    /// Approximate cost as displayed by the feed
    pub recipe_cost: String,
    /// Ordered ingredient list, "label quantity" form
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Why this recipe was suggested
    pub recommendation_reason: String,
    /// Main nutrients, as reported by the source
    pub main_nutrients: Vec<String>,
    /// One-line cooking tip
    pub cooking_point: String,
    /// Stored ingredients this recipe makes use of
    pub used_ingredients: Vec<String>,
}

/// A feed recipe provisionally eligible for suggestion because it shares at
/// least one ingredient with the user's stored list.
///
/// Created per request inside the matcher and discarded after the
/// orchestrator converts the final selection to [`CanonicalRecipe`]; never
/// persisted.
#[derive(Debug, Clone)]
pub struct CandidateRecipe {
    /// The underlying feed record
    pub raw: RawRecipe,
    /// Number of distinct stored ingredients matched (not occurrence count)
    pub matched_count: usize,
    /// Union of the recipe's declared used-ingredients and the matched
    /// names, deduplicated
    pub used_ingredients: Vec<String>,
    /// Resolved material list
    pub ingredients: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_type_labels_round_trip() {
        assert_eq!(
            ExpiryType::from_label("賞味期限"),
            Some(ExpiryType::BestBefore)
        );
        assert_eq!(ExpiryType::from_label("消費期限"), Some(ExpiryType::UseBy));
        assert_eq!(ExpiryType::from_label("unknown"), None);
        assert_eq!(ExpiryType::UseBy.as_str(), "消費期限");
    }

    #[test]
    fn test_raw_recipe_field_on_non_object_is_none() {
        let raw = RawRecipe::new(serde_json::json!([1, 2, 3]));
        assert!(raw.field("recipeTitle").is_none());
    }

    #[test]
    fn test_canonical_recipe_serializes_every_field() {
        let recipe = CanonicalRecipe::default();
        let json = serde_json::to_value(&recipe).unwrap();
        let object = json.as_object().unwrap();

        for key in [
            "recipeId",
            "title",
            "catchCopy",
            "foodImageUrl",
            "recipeUrl",
            "recipeCost",
            "ingredients",
            "instructions",
            "recommendationReason",
            "mainNutrients",
            "cookingPoint",
            "usedIngredients",
        ] {
            assert!(object.contains_key(key), "missing field {key}");
            assert!(!object[key].is_null(), "null field {key}");
        }
    }
}
