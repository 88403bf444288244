pub mod configurator;
pub mod noop;
pub mod ports;
pub mod types;

pub use configurator::ShieldConfigurator;
pub use noop::InMemoryShieldStore;
pub use ports::ShieldStorePort;
pub use types::{CategoryPolicy, ShieldPolicy};
