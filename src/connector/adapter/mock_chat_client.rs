use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::{ChatClient, ChatRequest};
use crate::domain::DomainError;

enum Reply {
    /// Derive a short reflection from the user prompt.
    Reflect,
    Fixed(String),
    Fail(String),
}

/// Offline [`ChatClient`] that records every request it receives.
pub struct MockChatClient {
    reply: Reply,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::with_reply(Reply::Reflect)
    }

    pub fn with_response(text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fixed(text.into()))
    }

    /// A client whose every call fails with [`DomainError::Llm`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, DomainError> {
        self.requests.lock().await.push(request.clone());

        match &self.reply {
            Reply::Reflect => Ok(format!(
                "In these words ({}) lies a quiet invitation to look inward.",
                request.user
            )),
            Reply::Fixed(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(DomainError::llm(message.clone())),
        }
    }
}
