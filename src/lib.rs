pub mod authorization;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod logging;
pub mod monitoring;
pub mod resolve;
pub mod selection;
pub mod shield;

pub use engine::ScreenTimeEngine;
pub use error::{EngineError, EngineErrorKind};
