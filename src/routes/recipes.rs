// ABOUTME: Saved-recipe passthrough routes accepting a canonical recipe payload
// ABOUTME: Trivial store-and-acknowledge contract; no recipe logic lives here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Saved-recipe routes
//!
//! Passthrough persistence: accept a [`CanonicalRecipe`] payload and
//! acknowledge, or return the stored list.
//!
//! [`CanonicalRecipe`]: crate::models::CanonicalRecipe

use crate::errors::AppResult;
use crate::models::CanonicalRecipe;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Acknowledgement for a saved recipe
#[derive(Debug, Serialize)]
pub struct SaveRecipeResponse {
    /// Assigned row ID
    pub id: i64,
}

/// Response for the saved-recipe list, newest first
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    /// Stored recipes
    pub recipes: Vec<CanonicalRecipe>,
}

/// Saved-recipe routes handler
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all saved-recipe routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", post(Self::save_recipe))
            .route("/api/recipes", get(Self::list_recipes))
            .with_state(resources)
    }

    /// Store a recipe payload and acknowledge
    async fn save_recipe(
        State(resources): State<Arc<ServerResources>>,
        Json(recipe): Json<CanonicalRecipe>,
    ) -> AppResult<impl IntoResponse> {
        let id = resources.database.save_recipe(&recipe).await?;
        Ok((StatusCode::CREATED, Json(SaveRecipeResponse { id })))
    }

    /// Return the stored recipe list
    async fn list_recipes(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let recipes = resources.database.list_saved_recipes().await?;
        Ok(Json(RecipeListResponse { recipes }))
    }
}
