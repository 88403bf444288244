use crate::{error::EngineError, shield::types::ShieldPolicy};

/// Process-wide enforcement store handle. SelectionStore is its sole writer;
/// the removal/installation toggles are independent pass-through settings.
pub trait ShieldStorePort: Send + Sync {
    fn commit(&self, policy: &ShieldPolicy) -> Result<(), EngineError>;

    fn set_deny_app_removal(&self, denied: bool) -> Result<(), EngineError>;

    fn set_deny_app_installation(&self, denied: bool) -> Result<(), EngineError>;
}
