use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Application,
    Category,
    WebDomain,
}

/// Opaque platform-issued handle. The engine carries the payload verbatim and
/// never inspects it; equality is whatever the platform issued.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
}

impl Token {
    pub fn application(data: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Application,
            data: data.into(),
        }
    }

    pub fn category(data: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::Category,
            data: data.into(),
        }
    }

    pub fn web_domain(data: impl Into<String>) -> Self {
        Self {
            kind: TokenKind::WebDomain,
            data: data.into(),
        }
    }
}

/// The three token sets a caller has chosen to restrict. Replaced wholesale on
/// every change; set membership rules out duplicates without external checks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub applications: BTreeSet<Token>,
    pub categories: BTreeSet<Token>,
    pub web_domains: BTreeSet<Token>,
}

impl Selection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty() && self.categories.is_empty() && self.web_domains.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.applications.len() + self.categories.len() + self.web_domains.len()
    }
}
