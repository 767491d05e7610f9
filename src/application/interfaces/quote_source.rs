use async_trait::async_trait;

use crate::domain::{DomainError, Quote};

/// A provider of random quotations.
///
/// Implementors own transport and payload details; a successful call always
/// yields a fully populated [`Quote`].
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn random_quote(&self) -> Result<Quote, DomainError>;
}
