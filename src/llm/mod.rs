// ABOUTME: LLM provider abstraction layer for pluggable generative model integration
// ABOUTME: Defines the provider contract, chat message types, and a mock provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # LLM Provider Service Provider Interface
//!
//! This module defines the contract generative-text providers must implement
//! to back the suggestion pipeline. The orchestrator treats the model as a
//! black box: one prompt in, free text out. Model output is untrusted
//! external input; shape enforcement happens downstream in
//! [`crate::suggestions`].
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use okawari_server::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("卵を使うレシピは？")]);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// End-user message
    User,
    /// Model-generated message
    Assistant,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored this message
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request configuration for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Model override; provider default when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with default generation settings
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// A completed chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text
    pub content: String,
    /// Model that produced the response
    pub model: String,
    /// Provider-reported finish reason, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

// ============================================================================
// Provider Contract
// ============================================================================

/// Contract for generative-text providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete a chat request, returning the generated text
    ///
    /// A single attempt; the caller decides how to recover from failure.
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;

    /// Human-readable provider name for logging
    fn display_name(&self) -> &str;

    /// Model used when the request does not specify one
    fn default_model(&self) -> &str;
}

/// Mock provider for testing (no network calls)
pub struct MockLlmProvider {
    response: Option<String>,
}

impl MockLlmProvider {
    /// A mock that answers every request with the given text
    #[must_use]
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    /// A mock whose completion always fails
    #[must_use]
    pub const fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    async fn complete(&self, _request: &ChatRequest) -> AppResult<ChatResponse> {
        self.response.as_ref().map_or_else(
            || Err(AppError::model_invocation("mock model failure")),
            |content| {
                Ok(ChatResponse {
                    content: content.clone(),
                    model: "mock".into(),
                    finish_reason: Some("stop".into()),
                })
            },
        )
    }

    fn display_name(&self) -> &str {
        "Mock"
    }

    fn default_model(&self) -> &str {
        "mock"
    }
}
