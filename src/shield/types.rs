use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::selection::Token;

/// Category block list plus the tokens exempted from it. The same policy value
/// governs application-category and web-domain-category enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub categories: BTreeSet<Token>,
    pub exceptions: BTreeSet<Token>,
}

/// Platform-committed block configuration, derived wholesale from a Selection.
/// `None` on a dimension means "no restriction configured", which the platform
/// distinguishes from an empty block list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShieldPolicy {
    pub applications: Option<BTreeSet<Token>>,
    pub application_categories: Option<CategoryPolicy>,
    pub web_domains: Option<BTreeSet<Token>>,
    pub web_domain_categories: Option<CategoryPolicy>,
}

impl ShieldPolicy {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.applications.is_none()
            && self.application_categories.is_none()
            && self.web_domains.is_none()
            && self.web_domain_categories.is_none()
    }
}
