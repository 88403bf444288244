pub mod gate;
pub mod noop;
pub mod ports;
pub mod types;

pub use gate::AuthorizationGate;
pub use noop::WatchAuthorizationPort;
pub use ports::{AuthorizationPort, RawStatusStream, StatusStream};
pub use types::{AuthorizationStatus, MemberKind};
