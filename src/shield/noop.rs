use std::sync::Mutex;

use crate::{error::EngineError, shield::ports::ShieldStorePort, shield::types::ShieldPolicy};

/// In-memory enforcement store. Records every commit so callers can inspect
/// the last fully-committed policy; stands in for the platform store when no
/// device-level backend is wired.
#[derive(Debug, Default)]
pub struct InMemoryShieldStore {
    inner: Mutex<InMemoryShieldState>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryShieldState {
    policy: ShieldPolicy,
    commit_count: u64,
    deny_app_removal: bool,
    deny_app_installation: bool,
}

impl InMemoryShieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy_snapshot(&self) -> ShieldPolicy {
        self.lock().policy.clone()
    }

    pub fn commit_count(&self) -> u64 {
        self.lock().commit_count
    }

    pub fn deny_app_removal(&self) -> bool {
        self.lock().deny_app_removal
    }

    pub fn deny_app_installation(&self) -> bool {
        self.lock().deny_app_installation
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryShieldState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ShieldStorePort for InMemoryShieldStore {
    fn commit(&self, policy: &ShieldPolicy) -> Result<(), EngineError> {
        let mut state = self.lock();
        state.policy = policy.clone();
        state.commit_count = state.commit_count.saturating_add(1);
        Ok(())
    }

    fn set_deny_app_removal(&self, denied: bool) -> Result<(), EngineError> {
        self.lock().deny_app_removal = denied;
        Ok(())
    }

    fn set_deny_app_installation(&self, denied: bool) -> Result<(), EngineError> {
        self.lock().deny_app_installation = denied;
        Ok(())
    }
}
