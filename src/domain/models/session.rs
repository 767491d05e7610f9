use super::{ExplanationModel, ExplanationOutcome, Quote};

/// One completed "discover" action: a quote and whatever became of its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    quote: Quote,
    explanation: ExplanationOutcome,
}

impl Discovery {
    pub fn new(quote: Quote, explanation: ExplanationOutcome) -> Self {
        Self { quote, explanation }
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn explanation(&self) -> &ExplanationOutcome {
        &self.explanation
    }
}

/// Process-local UI state, kept between renders.
///
/// Only the discover action mutates a session; rendering reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    discovery: Option<Discovery>,
    model: ExplanationModel,
    error: Option<String>,
}

impl Session {
    pub fn new(model: ExplanationModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn discovery(&self) -> Option<&Discovery> {
        self.discovery.as_ref()
    }

    pub fn model(&self) -> ExplanationModel {
        self.model
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn select_model(&mut self, model: ExplanationModel) {
        self.model = model;
    }

    /// Replaces the previous discovery wholesale and clears any error.
    pub fn record_discovery(&mut self, discovery: Discovery) {
        self.discovery = Some(discovery);
        self.error = None;
    }

    /// Keeps the previous discovery on screen and raises an error banner.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Explanation;

    fn discovery(content: &str, author: &str, text: &str) -> Discovery {
        Discovery::new(
            Quote::new(content, author).unwrap(),
            ExplanationOutcome::Generated(Explanation::new(text).unwrap()),
        )
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(ExplanationModel::Full);
        assert!(session.discovery().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.model(), ExplanationModel::Full);
    }

    #[test]
    fn test_record_discovery_replaces_previous() {
        let mut session = Session::default();
        session.record_discovery(discovery("A", "B", "first"));
        session.record_discovery(discovery("C", "D", "second"));

        let current = session.discovery().unwrap();
        assert_eq!(current.quote().content(), "C");
        assert_eq!(current.quote().author(), "D");
        assert_eq!(current.explanation().explanation().unwrap().text(), "second");
    }

    #[test]
    fn test_error_keeps_previous_discovery() {
        let mut session = Session::default();
        session.record_discovery(discovery("A", "B", "first"));
        session.record_error("quote API unreachable");

        assert_eq!(session.discovery().unwrap().quote().content(), "A");
        assert_eq!(session.error(), Some("quote API unreachable"));

        session.record_discovery(discovery("C", "D", "second"));
        assert!(session.error().is_none());
    }
}
