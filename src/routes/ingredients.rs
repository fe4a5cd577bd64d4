// ABOUTME: Ingredient store route handlers for registering and listing food items
// ABOUTME: Enforces the not-in-past expiry date rule at the HTTP boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Ingredient store routes
//!
//! Create and list operations over stored food items. Expiry date
//! validation happens here, at the boundary, not inside the store.

use crate::errors::{AppError, AppResult};
use crate::models::{ExpiryType, Ingredient};
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Request to register an ingredient
#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    /// Ingredient name
    pub name: String,
    /// Free-form quantity
    #[serde(default)]
    pub quantity: Option<String>,
    /// Expiry date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    /// Which kind of expiry the date represents
    #[serde(default)]
    pub expiry_type: Option<ExpiryType>,
}

/// Response for ingredient listing
#[derive(Debug, Serialize)]
pub struct IngredientListResponse {
    /// Stored ingredients in insertion order
    pub ingredients: Vec<Ingredient>,
}

/// Ingredient routes handler
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/foods", post(Self::create_ingredient))
            .route("/api/foods", get(Self::list_ingredients))
            .with_state(resources)
    }

    /// Register a new ingredient
    async fn create_ingredient(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateIngredientRequest>,
    ) -> AppResult<impl IntoResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Ingredient name must not be empty"));
        }

        if let Some(date) = request.date.as_deref() {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                AppError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {date}"))
            })?;
            if parsed < Utc::now().date_naive() {
                return Err(AppError::invalid_input(
                    "期限は今日以降の日付を選択してください。",
                ));
            }
        }

        let ingredient = Ingredient {
            id: None,
            name: name.to_owned(),
            quantity: request.quantity,
            date: request.date,
            expiry_type: request.expiry_type,
        };

        let stored = resources.database.create_ingredient(&ingredient).await?;
        info!(name = %stored.name, "Registered ingredient");

        Ok((StatusCode::CREATED, Json(stored)))
    }

    /// List all stored ingredients
    async fn list_ingredients(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let ingredients = resources.database.list_ingredients().await?;
        Ok(Json(IngredientListResponse { ingredients }))
    }
}
