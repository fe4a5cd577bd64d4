// ABOUTME: External recipe feed client returning loosely-typed recipe records
// ABOUTME: Implements the ranking-feed fetch with timeout, plus a mock for testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Recipe Feed Client
//!
//! Client for the third-party recipe ranking feed. The feed schema is not
//! controlled by this system: records arrive as arbitrary JSON objects whose
//! field names drift across endpoint versions, so the client deliberately
//! returns [`RawRecipe`] values and leaves all field resolution to the
//! normalizer in [`crate::suggestions`].
//!
//! A single read operation is exposed; there is no retry. A fetch failure is
//! terminal for the suggestion request that triggered it.

use crate::config::environment::RecipeFeedConfig;
use crate::errors::{AppError, AppResult};
use crate::models::RawRecipe;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Read access to the external recipe feed
#[async_trait]
pub trait RecipeFeed: Send + Sync {
    /// Fetch the current feed contents as loosely-typed records
    ///
    /// # Errors
    ///
    /// Returns `FeedUnavailable` when the feed cannot be reached, returns a
    /// non-success status, or serves a body that is not the expected
    /// envelope.
    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>>;
}

/// Feed response envelope: `{"result": [ ... ]}`
#[derive(Debug, Deserialize)]
struct FeedResponse {
    #[serde(default)]
    result: Vec<serde_json::Value>,
}

/// HTTP client for the recipe ranking feed
pub struct RecipeFeedClient {
    config: RecipeFeedConfig,
    http_client: reqwest::Client,
}

impl RecipeFeedClient {
    /// Create a new feed client
    #[must_use]
    pub fn new(config: RecipeFeedConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecipeFeed for RecipeFeedClient {
    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[
                ("applicationId", self.config.application_id.as_str()),
                ("format", "json"),
            ])
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(|e| AppError::feed_unavailable(format!("Feed request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::feed_unavailable(format!(
                "Feed returned HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let feed: FeedResponse = response
            .json()
            .await
            .map_err(|e| AppError::feed_unavailable(format!("Feed JSON parse error: {e}")))?;

        debug!(count = feed.result.len(), "Fetched recipe feed");

        // Non-object entries carry no usable fields and are dropped here so
        // downstream code can assume object-shaped records.
        Ok(feed
            .result
            .into_iter()
            .filter(serde_json::Value::is_object)
            .map(RawRecipe::new)
            .collect())
    }
}

/// Mock recipe feed for testing (no network calls)
#[derive(Default)]
pub struct MockRecipeFeed {
    recipes: Vec<RawRecipe>,
    fail: bool,
}

impl MockRecipeFeed {
    /// Create a mock feed serving the given records
    #[must_use]
    pub fn new(recipes: Vec<RawRecipe>) -> Self {
        Self {
            recipes,
            fail: false,
        }
    }

    /// Create a mock feed whose fetch always fails
    #[must_use]
    pub fn failing() -> Self {
        Self {
            recipes: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl RecipeFeed for MockRecipeFeed {
    async fn fetch_recipes(&self) -> AppResult<Vec<RawRecipe>> {
        if self.fail {
            return Err(AppError::feed_unavailable("mock feed failure"));
        }
        Ok(self.recipes.clone())
    }
}
