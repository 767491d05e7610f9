use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Quote fetch error: {0}")]
    QuoteFetch(String),

    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn quote_fetch(msg: impl Into<String>) -> Self {
        Self::QuoteFetch(msg.into())
    }

    pub fn invalid_quote(msg: impl Into<String>) -> Self {
        Self::InvalidQuote(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_quote_fetch(&self) -> bool {
        matches!(self, Self::QuoteFetch(_))
    }

    pub fn is_invalid_quote(&self) -> bool {
        matches!(self, Self::InvalidQuote(_))
    }

    pub fn is_llm(&self) -> bool {
        matches!(self, Self::Llm(_))
    }
}
