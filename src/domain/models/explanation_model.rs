use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The chat models a visitor can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationModel {
    #[default]
    Mini,
    Full,
    Legacy,
}

impl ExplanationModel {
    pub const ALL: [ExplanationModel; 3] = [
        ExplanationModel::Mini,
        ExplanationModel::Full,
        ExplanationModel::Legacy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationModel::Mini => "mini",
            ExplanationModel::Full => "full",
            ExplanationModel::Legacy => "legacy",
        }
    }

    /// Identifier sent to the chat-completion API.
    pub fn provider_id(&self) -> &'static str {
        match self {
            ExplanationModel::Mini => "gpt-4o-mini",
            ExplanationModel::Full => "gpt-4o",
            ExplanationModel::Legacy => "gpt-3.5-turbo",
        }
    }
}

impl FromStr for ExplanationModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ExplanationModel::ALL
            .into_iter()
            .find(|m| m.as_str() == wanted || m.provider_id() == wanted)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown model '{}'", s.trim())))
    }
}

impl std::fmt::Display for ExplanationModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_short_name() {
        assert_eq!("mini".parse::<ExplanationModel>().unwrap(), ExplanationModel::Mini);
        assert_eq!("Full".parse::<ExplanationModel>().unwrap(), ExplanationModel::Full);
        assert_eq!(" legacy ".parse::<ExplanationModel>().unwrap(), ExplanationModel::Legacy);
    }

    #[test]
    fn test_model_from_provider_id() {
        assert_eq!(
            "gpt-3.5-turbo".parse::<ExplanationModel>().unwrap(),
            ExplanationModel::Legacy
        );
        assert_eq!("gpt-4o".parse::<ExplanationModel>().unwrap(), ExplanationModel::Full);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        assert!("gpt-5".parse::<ExplanationModel>().is_err());
    }

    #[test]
    fn test_default_is_mini() {
        assert_eq!(ExplanationModel::default().provider_id(), "gpt-4o-mini");
    }
}
