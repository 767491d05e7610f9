use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A quotation and its author, as handed out by the quote API.
///
/// Both fields are guaranteed to hold at least one visible character;
/// construction fails otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    content: String,
    author: String,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let author = author.into();

        if is_blank(&content) {
            return Err(DomainError::invalid_quote("quote content is empty"));
        }
        if is_blank(&author) {
            return Err(DomainError::invalid_quote("quote author is empty"));
        }

        Ok(Self { content, author })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn attribution(&self) -> String {
        format!("\"{}\" — {}", self.content, self.author)
    }
}

/// Whitespace and control characters only (or nothing at all).
fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c.is_control())
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attribution())
    }
}
