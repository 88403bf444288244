use std::sync::Mutex;

use crate::{
    error::EngineError,
    history::{ports::WebHistoryPort, types::HistoryInterval},
};

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryDeletion {
    All {
        identifier: Option<String>,
    },
    During {
        interval: HistoryInterval,
        identifier: Option<String>,
    },
    ForUrl {
        url: String,
        identifier: Option<String>,
    },
}

/// History store that records each deletion instead of touching a browser.
#[derive(Debug, Default)]
pub struct RecordingWebHistory {
    deletions: Mutex<Vec<HistoryDeletion>>,
}

impl RecordingWebHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deletions(&self) -> Vec<HistoryDeletion> {
        self.deletions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, deletion: HistoryDeletion) {
        self.deletions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(deletion);
    }
}

impl WebHistoryPort for RecordingWebHistory {
    fn delete_all(&self, identifier: Option<&str>) -> Result<(), EngineError> {
        self.record(HistoryDeletion::All {
            identifier: identifier.map(str::to_string),
        });
        Ok(())
    }

    fn delete_during(
        &self,
        interval: &HistoryInterval,
        identifier: Option<&str>,
    ) -> Result<(), EngineError> {
        self.record(HistoryDeletion::During {
            interval: *interval,
            identifier: identifier.map(str::to_string),
        });
        Ok(())
    }

    fn delete_for_url(&self, url: &str, identifier: Option<&str>) -> Result<(), EngineError> {
        self.record(HistoryDeletion::ForUrl {
            url: url.to_string(),
            identifier: identifier.map(str::to_string),
        });
        Ok(())
    }
}
