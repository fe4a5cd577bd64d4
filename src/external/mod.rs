// ABOUTME: External service clients for third-party data sources
// ABOUTME: Currently the recipe feed client; the LLM client lives in crate::llm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! External API clients

/// Recipe feed client and mock implementation
pub mod recipe_feed;

pub use recipe_feed::{MockRecipeFeed, RecipeFeed, RecipeFeedClient};
