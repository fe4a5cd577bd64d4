// ABOUTME: HTTP route registration combining all route groups into one router
// ABOUTME: Applies tracing and CORS layers shared by every endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # HTTP Routes
//!
//! Route groups follow one pattern: a unit struct with a `routes()`
//! constructor returning an `axum::Router` wired to shared
//! [`ServerResources`].

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Condition entry endpoints
pub mod conditions;
/// Health and readiness endpoints
pub mod health;
/// Ingredient store endpoints
pub mod ingredients;
/// Saved-recipe passthrough endpoints
pub mod recipes;
/// The suggestion endpoint
pub mod suggestions;

pub use conditions::ConditionRoutes;
pub use health::HealthRoutes;
pub use ingredients::IngredientRoutes;
pub use recipes::RecipeRoutes;
pub use suggestions::SuggestionRoutes;

/// Build the complete application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(IngredientRoutes::routes(resources.clone()))
        .merge(ConditionRoutes::routes(resources.clone()))
        .merge(RecipeRoutes::routes(resources.clone()))
        .merge(SuggestionRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
