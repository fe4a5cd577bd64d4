// ABOUTME: Condition store route handlers for self-reported physical condition entries
// ABOUTME: Latest-first listing plus a dedicated latest-entry endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Condition store routes

use crate::errors::{AppError, AppResult};
use crate::models::Condition;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Request to record a condition entry
#[derive(Debug, Deserialize)]
pub struct CreateConditionRequest {
    /// Free-text condition (e.g. "元気")
    pub status: String,
}

/// Response for condition listing, newest first
#[derive(Debug, Serialize)]
pub struct ConditionListResponse {
    /// Stored condition entries
    pub conditions: Vec<Condition>,
}

/// Condition routes handler
pub struct ConditionRoutes;

impl ConditionRoutes {
    /// Create all condition routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/conditions", post(Self::create_condition))
            .route("/api/conditions", get(Self::list_conditions))
            .route("/api/conditions/latest", get(Self::latest_condition))
            .with_state(resources)
    }

    /// Record a new condition entry
    async fn create_condition(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateConditionRequest>,
    ) -> AppResult<impl IntoResponse> {
        let status = request.status.trim();
        if status.is_empty() {
            return Err(AppError::invalid_input("Condition status must not be empty"));
        }

        let stored = resources.database.create_condition(status).await?;
        info!(status = %stored.status, "Recorded condition");

        Ok((StatusCode::CREATED, Json(stored)))
    }

    /// List condition entries, newest first
    async fn list_conditions(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let conditions = resources.database.list_conditions().await?;
        Ok(Json(ConditionListResponse { conditions }))
    }

    /// Return only the most recent condition entry
    async fn latest_condition(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<impl IntoResponse> {
        let latest = resources
            .database
            .latest_condition()
            .await?
            .ok_or_else(|| AppError::not_found("Condition"))?;
        Ok(Json(latest))
    }
}
