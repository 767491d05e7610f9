use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, warn};

use crate::application::{
    ChatClient, DiscoverQuoteUseCase, ExplainQuoteUseCase, FetchQuoteUseCase, QuoteSource,
};
use crate::connector::adapter::{
    MockChatClient, MockQuoteSource, OpenAiClient, QuotableClient, DEFAULT_BASE_URL,
    DEFAULT_QUOTE_URL,
};

pub struct ContainerConfig {
    pub quote_url: String,
    /// Chat-completion credential. `None` (or a blank value) disables explanations.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub llm_timeout: Duration,
    /// Serve canned quotes and reflections instead of calling the network.
    pub mock_services: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            llm_timeout: Duration::from_secs(60),
            mock_services: false,
        }
    }
}

impl ContainerConfig {
    /// The configured API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

pub struct Container {
    quote_source: Arc<dyn QuoteSource>,
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        if config.mock_services {
            debug!("Using mock quote source and mock chat client");
            return Ok(Self::with_services(
                Arc::new(MockQuoteSource::new()),
                Some(Arc::new(MockChatClient::new())),
            ));
        }

        debug!("Using quote API at {}", config.quote_url);
        let quote_source: Arc<dyn QuoteSource> = Arc::new(QuotableClient::new(&config.quote_url)?);

        let chat_client: Option<Arc<dyn ChatClient>> = match config.api_key() {
            Some(key) => {
                debug!("Using chat-completion API at {}", config.openai_base_url);
                Some(Arc::new(OpenAiClient::new(
                    key,
                    &config.openai_base_url,
                    config.llm_timeout,
                )?))
            }
            None => {
                warn!("OPENAI_API_KEY is not set; quotes will be shown without explanations");
                None
            }
        };

        Ok(Self::with_services(quote_source, chat_client))
    }

    /// Wire the container from already-built services.
    pub fn with_services(
        quote_source: Arc<dyn QuoteSource>,
        chat_client: Option<Arc<dyn ChatClient>>,
    ) -> Self {
        Self {
            quote_source,
            chat_client,
        }
    }

    fn fetch_use_case(&self) -> FetchQuoteUseCase {
        FetchQuoteUseCase::new(self.quote_source.clone())
    }

    pub fn explain_use_case(&self) -> Option<ExplainQuoteUseCase> {
        self.chat_client
            .clone()
            .map(ExplainQuoteUseCase::new)
    }

    pub fn discover_use_case(&self) -> DiscoverQuoteUseCase {
        DiscoverQuoteUseCase::new(self.fetch_use_case(), self.explain_use_case())
    }

    pub fn has_credential(&self) -> bool {
        self.chat_client.is_some()
    }
}
