use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::QuoteSource;
use crate::domain::{DomainError, Quote};

pub const DEFAULT_QUOTE_URL: &str = "https://api.quotable.io/random";
const QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// The two fields we need out of the Quotable payload; everything else is ignored.
#[derive(Deserialize)]
struct ApiQuote {
    content: String,
    author: String,
}

/// HTTP client for the Quotable random-quote endpoint.
///
/// Certificate validation stays on. Every request is bounded by a fixed
/// 10-second timeout and is never retried.
pub struct QuotableClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl QuotableClient {
    pub fn new(url: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_timeout(url, QUOTE_TIMEOUT)
    }

    pub(crate) fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::config(format!("QuotableClient: cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    fn parse_quote(body: &str) -> Result<Quote, DomainError> {
        let api_quote: ApiQuote = serde_json::from_str(body).map_err(|e| {
            DomainError::invalid_quote(format!("QuotableClient: malformed response: {e}"))
        })?;
        Quote::new(api_quote.content, api_quote.author)
    }
}

#[async_trait]
impl QuoteSource for QuotableClient {
    async fn random_quote(&self) -> Result<Quote, DomainError> {
        debug!("GET {} (timeout {:?})", self.url, self.timeout);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::quote_fetch(format!("QuotableClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("QuotableClient: API returned {status}: {body}");
            return Err(DomainError::quote_fetch(format!(
                "QuotableClient: API returned {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::quote_fetch(format!("QuotableClient: failed to read response: {e}"))
        })?;

        Self::parse_quote(&body)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::connector::api::Container;
    use crate::connector::QuoteController;
    use crate::domain::ExplanationModel;

    /// A quote endpoint that accepts the request but answers far too late.
    async fn spawn_stalled_quote_api() -> String {
        let app = axum::Router::new().route(
            "/random",
            axum::routing::get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                r#"{"content": "late", "author": "nobody"}"#
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/random")
    }

    #[test]
    fn new_uses_fixed_ten_second_timeout() {
        let client = QuotableClient::new(DEFAULT_QUOTE_URL).unwrap();
        assert_eq!(client.timeout, Duration::from_secs(10));
        assert_eq!(client.timeout, QUOTE_TIMEOUT);
    }

    #[tokio::test]
    async fn stalled_api_times_out_as_fetch_error() {
        let url = spawn_stalled_quote_api().await;
        let client = QuotableClient::with_timeout(url, Duration::from_millis(200)).unwrap();

        let started = std::time::Instant::now();
        let err = client.random_quote().await.unwrap_err();

        assert!(err.is_quote_fetch());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn stalled_api_becomes_error_banner() {
        let url = spawn_stalled_quote_api().await;
        let client = QuotableClient::with_timeout(url, Duration::from_millis(200)).unwrap();
        let container = Container::with_services(Arc::new(client), None);
        let controller = QuoteController::new(&container, ExplanationModel::Mini);

        controller.discover(ExplanationModel::Mini).await;

        let session = controller.session().await;
        assert!(session.discovery().is_none());
        assert!(session.error().unwrap().contains("Could not fetch a new quote"));
        assert!(controller.render().await.contains("role=\"alert\">Could not fetch a new quote"));
    }

    #[test]
    fn parse_quote_extracts_content_and_author() {
        let quote = QuotableClient::parse_quote(r#"{"content": "A", "author": "B"}"#).unwrap();
        assert_eq!(quote, Quote::new("A", "B").unwrap());
    }

    #[test]
    fn parse_quote_ignores_extra_fields() {
        let body = r#"{
            "_id": "q1",
            "content": "Be yourself.",
            "author": "Oscar Wilde",
            "tags": ["famous-quotes"],
            "length": 12
        }"#;
        let quote = QuotableClient::parse_quote(body).unwrap();
        assert_eq!(quote.content(), "Be yourself.");
        assert_eq!(quote.author(), "Oscar Wilde");
    }

    #[test]
    fn parse_quote_rejects_missing_author() {
        let err = QuotableClient::parse_quote(r#"{"content": "A"}"#).unwrap_err();
        assert!(err.is_invalid_quote());
        assert!(err.to_string().contains("author"));
    }

    #[test]
    fn parse_quote_rejects_non_string_fields() {
        let err = QuotableClient::parse_quote(r#"{"content": "A", "author": 42}"#).unwrap_err();
        assert!(err.is_invalid_quote());
    }

    #[test]
    fn parse_quote_rejects_malformed_json() {
        assert!(QuotableClient::parse_quote("<html>502</html>").unwrap_err().is_invalid_quote());
    }

    #[test]
    fn parse_quote_rejects_control_only_content() {
        let err = QuotableClient::parse_quote(r#"{"content": "\u0007\u0008", "author": "B"}"#)
            .unwrap_err();
        assert!(err.is_invalid_quote());
    }

    #[test]
    fn parse_quote_rejects_empty_content() {
        let err = QuotableClient::parse_quote(r#"{"content": "", "author": "B"}"#).unwrap_err();
        assert!(err.is_invalid_quote());
    }
}
