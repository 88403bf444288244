pub mod noop;
pub mod ports;
pub mod types;

pub use noop::RecordingScheduler;
pub use ports::ActivitySchedulerPort;
pub use types::{MonitoringWindow, TimeOfDay};
