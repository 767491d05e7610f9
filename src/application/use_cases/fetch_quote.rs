use std::sync::Arc;

use tracing::debug;

use crate::application::QuoteSource;
use crate::domain::{DomainError, Quote};

pub struct FetchQuoteUseCase {
    quote_source: Arc<dyn QuoteSource>,
}

impl FetchQuoteUseCase {
    pub fn new(quote_source: Arc<dyn QuoteSource>) -> Self {
        Self { quote_source }
    }

    pub async fn execute(&self) -> Result<Quote, DomainError> {
        let quote = self.quote_source.random_quote().await?;
        debug!("Fetched quote by {}", quote.author());
        Ok(quote)
    }
}
