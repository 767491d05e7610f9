use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ChatClient, ChatRequest};
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completion response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the OpenAI chat-completions API (and compatible servers).
///
/// The base URL excludes the `/v1` suffix, e.g. `https://api.openai.com` or
/// `http://localhost:1234` for a local OpenAI-compatible server.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let url = format!("{}{COMPLETIONS_PATH}", base_url.as_ref().trim_end_matches('/'));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::config(format!("OpenAiClient: cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_body(request: &ChatRequest) -> ApiRequest<'_> {
        ApiRequest {
            model: request.model.provider_id(),
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: &request.system,
                },
                ApiMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }

    fn first_choice_text(response: ApiResponse) -> Result<String, DomainError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| DomainError::llm("OpenAiClient: response contained no completion text"))
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, DomainError> {
        debug!("POST {} (model {})", self.url, request.model.provider_id());

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&Self::request_body(request))
            .send()
            .await
            .map_err(|e| DomainError::llm(format!("OpenAiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::llm(format!("OpenAiClient: API returned {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::llm(format!("OpenAiClient: failed to parse response: {e}")))?;

        Self::first_choice_text(api_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExplanationModel;

    fn chat_request() -> ChatRequest {
        ChatRequest {
            model: ExplanationModel::Legacy,
            system: "be wise".to_string(),
            user: "Quote: \"A\" — B".to_string(),
            temperature: 0.7,
            max_tokens: 300,
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        let client =
            OpenAiClient::new("sk-test", "http://localhost:1234/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn request_body_has_system_then_user_message() {
        let request = chat_request();
        let body = serde_json::to_value(OpenAiClient::request_body(&request)).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 300);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be wise");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Quote: \"A\" — B");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn first_choice_text_is_trimmed() {
        let response: ApiResponse = serde_json::from_str(
            r#"{"choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  X \n"}},
                {"index": 1, "message": {"role": "assistant", "content": "Y"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(OpenAiClient::first_choice_text(response).unwrap(), "X");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let response: ApiResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(OpenAiClient::first_choice_text(response).unwrap_err().is_llm());
    }

    #[test]
    fn null_content_is_an_error() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(OpenAiClient::first_choice_text(response).is_err());
    }
}
