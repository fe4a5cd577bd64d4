// ABOUTME: SQLite-backed record stores for ingredients, conditions, and saved recipes
// ABOUTME: Simple create/list operations; the suggestion pipeline consumes these read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Record Stores
//!
//! SQLite persistence for the three simple record types the suggestion
//! pipeline consumes or produces: stored ingredients, condition entries, and
//! client-saved recipes. These stores are intentionally thin; all interesting
//! logic lives in [`crate::suggestions`].

use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalRecipe, Condition, ExpiryType, Ingredient};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::info;

/// Database handle wrapping a SQLite connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database at `url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns a `DatabaseError` if the URL is invalid, the pool cannot be
    /// created, or migration fails.
    pub async fn new(url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        // In-memory databases are per-connection; a single connection keeps
        // the schema visible across queries.
        let max_connections = if url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let database = Self { pool };
        database.migrate().await?;
        info!("Database initialized: {url}");
        Ok(database)
    }

    /// Create tables when they do not exist yet
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity TEXT,
                date TEXT,
                expiry_type TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conditions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                status TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS saved_recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                payload TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ========================================================================
    // Ingredients
    // ========================================================================

    /// Store a new ingredient, returning it with its assigned row ID
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_ingredient(&self, ingredient: &Ingredient) -> AppResult<Ingredient> {
        let result = sqlx::query(
            r"
            INSERT INTO ingredients (name, quantity, date, expiry_type)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(&ingredient.name)
        .bind(&ingredient.quantity)
        .bind(&ingredient.date)
        .bind(ingredient.expiry_type.map(|t| t.as_str()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store ingredient: {e}")))?;

        Ok(Ingredient {
            id: Some(result.last_insert_rowid()),
            ..ingredient.clone()
        })
    }

    /// List all stored ingredients in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        let rows = sqlx::query(
            r"
            SELECT id, name, quantity, date, expiry_type
            FROM ingredients
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list ingredients: {e}")))?;

        let mut ingredients = Vec::with_capacity(rows.len());
        for row in rows {
            ingredients.push(Self::row_to_ingredient(&row)?);
        }
        Ok(ingredients)
    }

    fn row_to_ingredient(row: &SqliteRow) -> AppResult<Ingredient> {
        let expiry_label: Option<String> = row.try_get("expiry_type")?;
        Ok(Ingredient {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            date: row.try_get("date")?,
            expiry_type: expiry_label.as_deref().and_then(ExpiryType::from_label),
        })
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    /// Store a new condition entry, returning it with its assigned row ID
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_condition(&self, status: &str) -> AppResult<Condition> {
        let created_at = Utc::now();
        let result = sqlx::query(
            r"
            INSERT INTO conditions (status, created_at)
            VALUES ($1, $2)
            ",
        )
        .bind(status)
        .bind(created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store condition: {e}")))?;

        Ok(Condition {
            id: Some(result.last_insert_rowid()),
            status: status.to_owned(),
            created_at,
        })
    }

    /// List condition entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_conditions(&self) -> AppResult<Vec<Condition>> {
        let rows = sqlx::query(
            r"
            SELECT id, status, created_at
            FROM conditions
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list conditions: {e}")))?;

        let mut conditions = Vec::with_capacity(rows.len());
        for row in rows {
            conditions.push(Self::row_to_condition(&row)?);
        }
        Ok(conditions)
    }

    /// Fetch only the most recent condition entry, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn latest_condition(&self) -> AppResult<Option<Condition>> {
        let row = sqlx::query(
            r"
            SELECT id, status, created_at
            FROM conditions
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch latest condition: {e}")))?;

        row.as_ref().map(Self::row_to_condition).transpose()
    }

    fn row_to_condition(row: &SqliteRow) -> AppResult<Condition> {
        let created_at_raw: String = row.try_get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_raw)
            .map_err(|e| AppError::database(format!("Invalid stored timestamp: {e}")))?
            .with_timezone(&Utc);

        Ok(Condition {
            id: Some(row.try_get("id")?),
            status: row.try_get("status")?,
            created_at,
        })
    }

    // ========================================================================
    // Saved recipes (passthrough store)
    // ========================================================================

    /// Persist a client-saved recipe payload, returning its row ID
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub async fn save_recipe(&self, recipe: &CanonicalRecipe) -> AppResult<i64> {
        let payload = serde_json::to_string(recipe)?;
        let result = sqlx::query(
            r"
            INSERT INTO saved_recipes (payload, created_at)
            VALUES ($1, $2)
            ",
        )
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save recipe: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// List saved recipes, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored payload is corrupt.
    pub async fn list_saved_recipes(&self) -> AppResult<Vec<CanonicalRecipe>> {
        let rows = sqlx::query(
            r"
            SELECT payload
            FROM saved_recipes
            ORDER BY id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list saved recipes: {e}")))?;

        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            let payload: String = row.try_get("payload")?;
            recipes.push(serde_json::from_str(&payload)?);
        }
        Ok(recipes)
    }
}
