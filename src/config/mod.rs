// ABOUTME: Configuration module exposing environment-based server settings
// ABOUTME: All configuration comes from environment variables with sane defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management for the Okawari server

/// Environment-based configuration management
pub mod environment;

pub use environment::{LogLevel, ServerConfig};
