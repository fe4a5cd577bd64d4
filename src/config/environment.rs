// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, defaults, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages and above
    #[default]
    Info,
    /// Debug messages and above
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. `sqlite:okawari.db` or `sqlite::memory:`)
    pub url: String,
}

/// External recipe feed configuration
#[derive(Debug, Clone)]
pub struct RecipeFeedConfig {
    /// Application ID / API key for the feed provider
    pub application_id: String,
    /// Base URL for the recipe ranking endpoint
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RecipeFeedConfig {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            base_url:
                "https://app.rakuten.co.jp/services/api/Recipe/CategoryRanking/20170426"
                    .into(),
            timeout_secs: 5,
        }
    }
}

/// Generative model configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name override (provider default when `None`)
    pub model: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: None,
            timeout_secs: 60,
        }
    }
}

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listener port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Database settings
    pub database: DatabaseConfig,
    /// Recipe feed settings
    pub feed: RecipeFeedConfig,
    /// Generative model settings
    pub llm: LlmConfig,
}

/// Read an environment variable with a default, parsed into the target type
fn env_var_or<T: std::str::FromStr>(key: &str, default: &str) -> AppResult<T> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_owned());
    raw.parse()
        .map_err(|_| AppError::config(format!("Invalid value for {key}: {raw}")))
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a variable is present but unparseable.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http_port: env_var_or("HTTP_PORT", "8081")?,
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            ),
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:okawari.db".into()),
            },
            feed: RecipeFeedConfig {
                application_id: env::var("RECIPE_FEED_APP_ID").unwrap_or_default(),
                base_url: env::var("RECIPE_FEED_BASE_URL")
                    .unwrap_or_else(|_| RecipeFeedConfig::default().base_url),
                timeout_secs: env_var_or("RECIPE_FEED_TIMEOUT_SECS", "5")?,
            },
            llm: LlmConfig {
                model: env::var("LLM_MODEL").ok(),
                timeout_secs: env_var_or("LLM_TIMEOUT_SECS", "60")?,
            },
        })
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Okawari Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Recipe Feed: {} (timeout {}s)\n\
             - LLM Model: {} (timeout {}s)",
            self.http_port,
            self.log_level,
            self.database.url,
            self.feed.base_url,
            self.feed.timeout_secs,
            self.llm.model.as_deref().unwrap_or("provider default"),
            self.llm.timeout_secs,
        )
    }
}
