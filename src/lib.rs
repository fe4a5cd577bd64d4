// ABOUTME: Main library entry point for the Okawari recipe suggestion backend
// ABOUTME: Wires storage, external feed, LLM providers, and the suggestion pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Okawari Suggest Server
//!
//! A small backend that tracks a user's food inventory and self-reported
//! physical condition, then produces recipe suggestions by combining an
//! external recipe feed with a generative-text model call.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: Common data structures (ingredients, conditions, recipes)
//! - **Database**: SQLite-backed record stores for ingredients and conditions
//! - **External**: Client for the third-party recipe feed
//! - **LLM**: Provider abstraction for generative-text models (Gemini)
//! - **Suggestions**: The matching, ranking, prompting, and normalization
//!   pipeline that reconciles feed records and model output into one fixed
//!   output contract
//! - **Routes**: Axum HTTP handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use okawari_server::config::environment::ServerConfig;
//! use okawari_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Okawari server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Environment-based configuration management
pub mod config;

/// SQLite-backed record stores for ingredients, conditions, and saved recipes
pub mod database;

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Client for the external recipe feed
pub mod external;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Logging configuration and structured logging setup
pub mod logging;

/// Common data structures shared across modules
pub mod models;

/// Shared server resources handed to route handlers
pub mod resources;

/// `HTTP` route handlers
pub mod routes;

/// The recipe suggestion pipeline: matcher, selector, prompt, normalizer,
/// and the orchestrator tying them together
pub mod suggestions;
