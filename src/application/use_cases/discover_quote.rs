use tracing::{info, warn};

use crate::domain::{Discovery, DomainError, ExplanationModel, ExplanationOutcome};

use super::{ExplainQuoteUseCase, FetchQuoteUseCase};

/// The "discover a new quote" action: fetch, then explain when a chat client
/// is configured.
///
/// A failed fetch is returned as an error. A failed explanation is not; it is
/// folded into [`ExplanationOutcome::Failed`] so the freshly fetched quote can
/// still be shown.
pub struct DiscoverQuoteUseCase {
    fetch: FetchQuoteUseCase,
    explain: Option<ExplainQuoteUseCase>,
}

impl DiscoverQuoteUseCase {
    pub fn new(fetch: FetchQuoteUseCase, explain: Option<ExplainQuoteUseCase>) -> Self {
        Self { fetch, explain }
    }

    pub fn can_explain(&self) -> bool {
        self.explain.is_some()
    }

    pub async fn execute(&self, model: ExplanationModel) -> Result<Discovery, DomainError> {
        let quote = self.fetch.execute().await?;

        let explanation = match &self.explain {
            Some(explain) => match explain.execute(&quote, model).await {
                Ok(explanation) => ExplanationOutcome::Generated(explanation),
                Err(e) => {
                    warn!("Explanation failed: {}", e);
                    ExplanationOutcome::Failed(e.to_string())
                }
            },
            None => {
                warn!("OPENAI_API_KEY is not set; skipping explanation");
                ExplanationOutcome::MissingCredential
            }
        };

        info!(
            "Discovered quote by {} (explanation: {})",
            quote.author(),
            match &explanation {
                ExplanationOutcome::Generated(_) => "generated",
                ExplanationOutcome::MissingCredential => "no credential",
                ExplanationOutcome::Failed(_) => "failed",
            }
        );

        Ok(Discovery::new(quote, explanation))
    }
}
