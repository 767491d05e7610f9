use anyhow::Result;

use crate::domain::{Discovery, ExplanationModel, ExplanationOutcome};

use super::super::Container;

pub const MISSING_CREDENTIAL_WARNING: &str =
    "Set your OPENAI_API_KEY environment variable to receive an insightful explanation.";

/// One-shot terminal rendition of the discover action.
pub struct DiscoverController<'a> {
    container: &'a Container,
}

impl<'a> DiscoverController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn discover(&self, model: ExplanationModel) -> Result<String> {
        let use_case = self.container.discover_use_case();
        let discovery = use_case.execute(model).await?;
        Ok(self.format_discovery(&discovery))
    }

    fn format_discovery(&self, discovery: &Discovery) -> String {
        let quote = discovery.quote();
        let explanation = match discovery.explanation() {
            ExplanationOutcome::Generated(explanation) => {
                format!("Illumination\n============\n{}", explanation.text())
            }
            ExplanationOutcome::MissingCredential => {
                format!("Warning: {}", MISSING_CREDENTIAL_WARNING)
            }
            ExplanationOutcome::Failed(message) => {
                format!("Explanation unavailable: {}", message)
            }
        };

        format!(
            "\"{}\"\n    — {}\n\n{}",
            quote.content(),
            quote.author(),
            explanation
        )
    }
}
