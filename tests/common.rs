// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides logging setup, feed record builders, and server resource assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
#![allow(missing_docs)]

//! Shared test utilities for `okawari_server`

use okawari_server::{
    config::environment::{
        DatabaseConfig, LlmConfig, LogLevel, RecipeFeedConfig, ServerConfig,
    },
    database::Database,
    external::MockRecipeFeed,
    llm::MockLlmProvider,
    models::RawRecipe,
    resources::ServerResources,
};
use serde_json::json;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a feed-shaped raw recipe with the given title and material list
pub fn feed_recipe(title: &str, materials: &[&str]) -> RawRecipe {
    RawRecipe::new(json!({
        "recipeId": 1,
        "recipeTitle": title,
        "recipeUrl": format!("https://recipe.example/{title}"),
        "recipeMaterial": materials,
        "recipeCost": "300円前後",
    }))
}

/// Server configuration suitable for tests: in-memory database, defaults
/// everywhere else
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        feed: RecipeFeedConfig::default(),
        llm: LlmConfig::default(),
    }
}

/// Assemble server resources over mock external collaborators
pub async fn test_resources(
    feed: MockRecipeFeed,
    llm: MockLlmProvider,
) -> Arc<ServerResources> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await.unwrap();
    Arc::new(ServerResources::new(
        database,
        Arc::new(feed),
        Arc::new(llm),
        test_config(),
    ))
}
