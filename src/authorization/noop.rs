use async_trait::async_trait;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::authorization::{
    ports::{AuthorizationPort, RawStatusStream},
    types::MemberKind,
};

/// Consent service backed by a watch channel: approves every request, and
/// publishes whatever raw status was last pushed. Each subscription replays
/// the current status before transitions, like the platform publisher.
pub struct WatchAuthorizationPort {
    status: watch::Sender<String>,
}

impl WatchAuthorizationPort {
    pub fn new(initial_status: impl Into<String>) -> Self {
        let (status, _) = watch::channel(initial_status.into());
        Self { status }
    }

    /// Updates even when nobody is subscribed, like the platform publisher.
    pub fn push_status(&self, raw: impl Into<String>) {
        self.status.send_replace(raw.into());
    }
}

impl Default for WatchAuthorizationPort {
    fn default() -> Self {
        Self::new("notDetermined")
    }
}

#[async_trait]
impl AuthorizationPort for WatchAuthorizationPort {
    async fn request_authorization(&self, _member: MemberKind) -> Result<(), String> {
        self.status.send_replace("approved".to_string());
        Ok(())
    }

    async fn revoke_authorization(&self) -> Result<(), String> {
        self.status.send_replace("notDetermined".to_string());
        Ok(())
    }

    fn status_stream(&self) -> RawStatusStream {
        Box::pin(WatchStream::new(self.status.subscribe()))
    }
}
