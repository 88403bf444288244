use std::{collections::BTreeSet, sync::Arc};

use crate::{
    error::EngineError,
    selection::{Selection, Token},
    shield::{
        ports::ShieldStorePort,
        types::{CategoryPolicy, ShieldPolicy},
    },
};

/// Translates a Selection into the enforcement policy and commits it. The
/// derivation is pure and total; applying the same Selection twice commits the
/// same policy.
pub struct ShieldConfigurator {
    store: Arc<dyn ShieldStorePort>,
    category_exceptions: BTreeSet<Token>,
}

impl ShieldConfigurator {
    pub fn new(store: Arc<dyn ShieldStorePort>) -> Self {
        Self {
            store,
            category_exceptions: BTreeSet::new(),
        }
    }

    /// Tokens exempted from category blocking, applied uniformly to the
    /// application-category and web-domain-category dimensions.
    pub fn with_category_exceptions(mut self, exceptions: BTreeSet<Token>) -> Self {
        self.category_exceptions = exceptions;
        self
    }

    pub fn derive(&self, selection: &Selection) -> ShieldPolicy {
        let category_policy = if selection.categories.is_empty() {
            None
        } else {
            Some(CategoryPolicy {
                categories: selection.categories.clone(),
                exceptions: self.category_exceptions.clone(),
            })
        };

        ShieldPolicy {
            applications: non_empty(&selection.applications),
            application_categories: category_policy.clone(),
            web_domains: non_empty(&selection.web_domains),
            web_domain_categories: category_policy,
        }
    }

    pub fn apply(&self, selection: &Selection) -> Result<(), EngineError> {
        let policy = self.derive(selection);
        self.store.commit(&policy)?;
        tracing::debug!(
            target: "shield",
            applications = selection.applications.len(),
            categories = selection.categories.len(),
            web_domains = selection.web_domains.len(),
            disabled = policy.is_disabled(),
            "shield_policy_committed"
        );
        Ok(())
    }

    pub fn set_deny_app_removal(&self, denied: bool) -> Result<(), EngineError> {
        self.store.set_deny_app_removal(denied)
    }

    pub fn set_deny_app_installation(&self, denied: bool) -> Result<(), EngineError> {
        self.store.set_deny_app_installation(denied)
    }
}

fn non_empty(tokens: &BTreeSet<Token>) -> Option<BTreeSet<Token>> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.clone())
    }
}
