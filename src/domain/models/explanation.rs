use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Model-written prose interpreting a [`super::Quote`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    text: String,
}

impl Explanation {
    /// Trims surrounding whitespace; blank text is rejected.
    pub fn new(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(DomainError::llm("model returned an empty explanation"));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// What ended up in the explanation slot after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationOutcome {
    Generated(Explanation),
    /// No API credential is configured; the generator was never called.
    MissingCredential,
    Failed(String),
}

impl ExplanationOutcome {
    pub fn explanation(&self) -> Option<&Explanation> {
        match self {
            Self::Generated(explanation) => Some(explanation),
            _ => None,
        }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explanation_is_trimmed() {
        let explanation = Explanation::new("  \n X \t").unwrap();
        assert_eq!(explanation.text(), "X");
    }

    #[test]
    fn test_blank_explanation_is_an_llm_error() {
        let err = Explanation::new("   ").unwrap_err();
        assert!(err.is_llm());
    }

    #[test]
    fn test_outcome_accessors() {
        let generated = ExplanationOutcome::Generated(Explanation::new("X").unwrap());
        assert_eq!(generated.explanation().map(|e| e.text()), Some("X"));
        assert!(ExplanationOutcome::MissingCredential.explanation().is_none());
        assert!(ExplanationOutcome::MissingCredential.is_missing_credential());
        assert!(ExplanationOutcome::Failed("quota".into()).is_failed());
    }
}
