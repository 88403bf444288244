use std::pin::Pin;

use async_trait::async_trait;
use futures_core::Stream;

use crate::{
    authorization::types::{AuthorizationStatus, MemberKind},
    error::EngineError,
};

pub type RawStatusStream = Pin<Box<dyn Stream<Item = String> + Send + 'static>>;

pub type StatusStream =
    Pin<Box<dyn Stream<Item = Result<AuthorizationStatus, EngineError>> + Send + 'static>>;

/// Platform consent service. Request/revoke suspend until the platform flow
/// completes; a refusal carries the platform's message verbatim. Statuses come
/// back raw so that values this engine does not know about stay visible.
#[async_trait]
pub trait AuthorizationPort: Send + Sync {
    async fn request_authorization(&self, member: MemberKind) -> Result<(), String>;

    async fn revoke_authorization(&self) -> Result<(), String>;

    /// Fresh stream per call: the current status first, then every
    /// transition the platform reports.
    fn status_stream(&self) -> RawStatusStream;
}
