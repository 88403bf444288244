pub mod noop;
pub mod ports;
pub mod types;

pub use noop::{HistoryDeletion, RecordingWebHistory};
pub use ports::WebHistoryPort;
pub use types::HistoryInterval;
