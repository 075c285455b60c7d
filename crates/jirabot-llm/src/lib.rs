//! Language-model backend abstraction.
//!
//! The [`LanguageModel`] trait is the narrow contract the chat layer talks
//! to: one request in, one text completion out. [`openai::OpenAiClient`] is
//! the HTTP implementation for OpenAI-compatible chat completion APIs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use jirabot_core::Turn;

pub mod openai;

pub use openai::OpenAiClient;

/// Result type for language-model operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while requesting a completion.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Request rejected with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout")]
    Timeout,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Model returned an empty completion")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_decode() {
            LlmError::Parse(err.to_string())
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Ordered messages: system turn, prior context, then the new user turn.
    pub messages: Vec<Turn>,
    pub temperature: f32,
    /// Response length cap in tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Turn>) -> Self {
        Self {
            messages,
            temperature: 0.7,
            max_tokens: 150,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Contract for anything that can turn a conversation into a completion.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &str;

    /// Request a single text completion.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
