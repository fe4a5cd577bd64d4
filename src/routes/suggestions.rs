// ABOUTME: The suggestion endpoint running the full matching and model pipeline
// ABOUTME: Returns the canonical recipe contract or a JSON error payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Suggestion endpoint
//!
//! `POST /api/suggestions` is the primary entry point: it accepts the
//! ingredient names and condition text, runs the pipeline in
//! [`crate::suggestions`], and responds with either a full
//! `{"recipes": [...]}` payload or an error payload, never a mix.

use crate::errors::AppResult;
use crate::models::CanonicalRecipe;
use crate::resources::ServerResources;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Request for recipe suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    /// Stored ingredient names to cook with
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Current condition, free text; empty means unspecified
    #[serde(default)]
    pub condition: String,
}

/// Successful suggestion response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Suggested recipes in the canonical contract
    pub recipes: Vec<CanonicalRecipe>,
}

/// Suggestion routes handler
pub struct SuggestionRoutes;

impl SuggestionRoutes {
    /// Create the suggestion route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/suggestions", post(Self::suggest))
            .with_state(resources)
    }

    /// Run the suggestion pipeline for the given ingredients and condition
    async fn suggest(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SuggestionRequest>,
    ) -> AppResult<impl IntoResponse> {
        info!(
            ingredient_count = request.ingredients.len(),
            "Suggestion request received"
        );

        let recipes = resources
            .suggestions
            .suggest(request.ingredients, &request.condition)
            .await?;

        Ok(Json(SuggestionResponse { recipes }))
    }
}
