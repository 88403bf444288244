use crate::{error::EngineError, monitoring::types::MonitoringWindow};

/// Platform device-activity scheduler. Takes ownership of the window; a
/// refusal surfaces as `PlatformRejected`.
pub trait ActivitySchedulerPort: Send + Sync {
    fn start_monitoring(&self, window: MonitoringWindow) -> Result<(), EngineError>;
}
