use std::sync::Mutex;

use crate::{
    error::EngineError,
    monitoring::{ports::ActivitySchedulerPort, types::MonitoringWindow},
};

/// Scheduler that records the windows it was asked to monitor.
#[derive(Debug, Default)]
pub struct RecordingScheduler {
    windows: Mutex<Vec<MonitoringWindow>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn windows(&self) -> Vec<MonitoringWindow> {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ActivitySchedulerPort for RecordingScheduler {
    fn start_monitoring(&self, window: MonitoringWindow) -> Result<(), EngineError> {
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(window);
        Ok(())
    }
}
