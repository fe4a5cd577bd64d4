// ABOUTME: Shared server resources handed to route handlers via axum state
// ABOUTME: Bundles the database, feed client, model provider, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Shared server resources
//!
//! One `ServerResources` instance is built at startup and shared across all
//! request handlers behind an `Arc`. Nothing in it is request-mutable: the
//! stores are read-through, and the suggestion pipeline owns all of its
//! per-request state.

use crate::config::environment::ServerConfig;
use crate::database::Database;
use crate::external::RecipeFeed;
use crate::llm::LlmProvider;
use crate::suggestions::SuggestionService;
use std::sync::Arc;

/// Everything a route handler needs
pub struct ServerResources {
    /// Record stores
    pub database: Database,
    /// The suggestion pipeline
    pub suggestions: SuggestionService,
    /// Loaded configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble resources from their parts
    #[must_use]
    pub fn new(
        database: Database,
        feed: Arc<dyn RecipeFeed>,
        llm: Arc<dyn LlmProvider>,
        config: ServerConfig,
    ) -> Self {
        Self {
            database,
            suggestions: SuggestionService::new(feed, llm),
            config,
        }
    }
}
