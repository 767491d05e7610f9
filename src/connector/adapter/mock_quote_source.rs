use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::QuoteSource;
use crate::domain::{DomainError, Quote};

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    ("The unexamined life is not worth living.", "Socrates"),
    ("Well done is better than well said.", "Benjamin Franklin"),
    ("What we think, we become.", "Buddha"),
];

/// Offline [`QuoteSource`] that hands out a fixed list of quotes in order,
/// wrapping around at the end.
pub struct MockQuoteSource {
    quotes: Vec<Quote>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        let quotes = BUILTIN_QUOTES
            .iter()
            .filter_map(|(content, author)| Quote::new(*content, *author).ok())
            .collect();
        Self::with_quotes(quotes)
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every call fails with [`DomainError::QuoteFetch`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            quotes: Vec::new(),
            failure: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn random_quote(&self) -> Result<Quote, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(DomainError::quote_fetch(message.clone()));
        }
        if self.quotes.is_empty() {
            return Err(DomainError::quote_fetch("MockQuoteSource: no quotes configured"));
        }

        Ok(self.quotes[call % self.quotes.len()].clone())
    }
}
