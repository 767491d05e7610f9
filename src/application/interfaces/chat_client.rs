use async_trait::async_trait;

use crate::domain::{DomainError, ExplanationModel};

/// A single-turn chat-completion request: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: ExplanationModel,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// An interface for sending chat-style prompts to an LLM and receiving text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Consumers (e.g. [`crate::application::ExplainQuoteUseCase`]) remain
/// decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the request and return the text of the first completion choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, DomainError>;
}
