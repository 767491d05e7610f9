use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, ChatRequest};
use crate::domain::{DomainError, Explanation, ExplanationModel, Quote};

const SYSTEM_PROMPT: &str = "\
You are a wise, eloquent philosopher with deep insights. When given a quote, explain its \
profound meaning in an elegant, thoughtful way using beautiful language. Keep it concise \
(120 words max) but make it sound sophisticated and profound.";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 300;

/// Upper bound, in characters, for each quote field placed in the prompt.
const MAX_PROMPT_FIELD_CHARS: usize = 1000;

/// Asks a chat model to illuminate a quote.
pub struct ExplainQuoteUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl ExplainQuoteUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(
        &self,
        quote: &Quote,
        model: ExplanationModel,
    ) -> Result<Explanation, DomainError> {
        let request = Self::build_request(quote, model);
        debug!("Requesting explanation from {}", model.provider_id());

        let text = self.chat_client.complete(&request).await?;
        Explanation::new(text)
    }

    pub fn build_request(quote: &Quote, model: ExplanationModel) -> ChatRequest {
        ChatRequest {
            model,
            system: SYSTEM_PROMPT.to_string(),
            user: format!(
                "Quote: \"{}\" — {}",
                sanitize_for_prompt(quote.content()),
                sanitize_for_prompt(quote.author())
            ),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Strips control characters, collapses whitespace runs and caps the length
/// so third-party text cannot reshape the prompt layout.
fn sanitize_for_prompt(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter(|c| !c.is_control()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_PROMPT_FIELD_CHARS)
        .collect()
}
