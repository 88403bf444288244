use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    error::EngineError,
    selection::{codec, types::Selection},
    shield::ShieldConfigurator,
};

/// Holds the current Selection and keeps it in lockstep with the enforcement
/// store: every successful mutation commits the derived policy before the
/// critical section is released, so no caller can observe a Selection whose
/// policy has not been applied.
pub struct SelectionStore {
    current: Mutex<Selection>,
    shield: Arc<ShieldConfigurator>,
}

impl SelectionStore {
    pub fn new(shield: Arc<ShieldConfigurator>) -> Self {
        Self {
            current: Mutex::new(Selection::empty()),
            shield,
        }
    }

    pub async fn get_selection(&self) -> Selection {
        self.current.lock().await.clone()
    }

    /// Decode the transport record, then replace-then-apply as one unit.
    /// Decode failures happen before the lock is taken and mutate nothing.
    pub async fn set_encoded(&self, record: &Value) -> Result<(), EngineError> {
        let candidate = codec::decode(record)?;
        self.set_selection(candidate).await
    }

    pub async fn set_selection(&self, candidate: Selection) -> Result<(), EngineError> {
        let mut guard = self.current.lock().await;
        // Commit the policy first: if the platform refuses, the stored
        // Selection stays on the last enforced value.
        self.shield.apply(&candidate)?;
        let token_count = candidate.token_count();
        *guard = candidate;
        tracing::info!(
            target: "selection",
            tokens = token_count,
            "selection_replaced"
        );
        Ok(())
    }

    pub async fn clear_selection(&self) -> Result<(), EngineError> {
        self.set_selection(Selection::empty()).await
    }
}
