use std::sync::Arc;

use futures_util::StreamExt;

use crate::{
    authorization::{
        ports::{AuthorizationPort, StatusStream},
        types::{AuthorizationStatus, MemberKind},
    },
    error::{
        EngineError, authorization_denied, internal_error, revocation_failed, unrecognized_status,
    },
};

/// Observes and drives the platform consent flow. Statuses outside the known
/// enum surface as `UnrecognizedStatus` rather than being silently mapped.
pub struct AuthorizationGate {
    port: Arc<dyn AuthorizationPort>,
}

impl AuthorizationGate {
    pub fn new(port: Arc<dyn AuthorizationPort>) -> Self {
        Self { port }
    }

    pub async fn request_authorization(&self, member: MemberKind) -> Result<(), EngineError> {
        self.port
            .request_authorization(member)
            .await
            .map_err(authorization_denied)?;
        tracing::info!(target: "authorization", member = ?member, "authorization_granted");
        Ok(())
    }

    pub async fn revoke_authorization(&self) -> Result<(), EngineError> {
        self.port
            .revoke_authorization()
            .await
            .map_err(revocation_failed)?;
        tracing::info!(target: "authorization", "authorization_revoked");
        Ok(())
    }

    pub async fn current_status(&self) -> Result<AuthorizationStatus, EngineError> {
        let mut stream = self.port.status_stream();
        match stream.next().await {
            Some(raw) => map_status(&raw),
            None => Err(internal_error("authorization status stream ended")),
        }
    }

    /// Lazy, infinite, restartable: each call subscribes afresh at the port.
    pub fn observe_status(&self) -> StatusStream {
        Box::pin(self.port.status_stream().map(|raw| map_status(&raw)))
    }
}

fn map_status(raw: &str) -> Result<AuthorizationStatus, EngineError> {
    match raw {
        "notDetermined" => Ok(AuthorizationStatus::NotDetermined),
        "denied" => Ok(AuthorizationStatus::Denied),
        "approved" => Ok(AuthorizationStatus::Approved),
        other => Err(unrecognized_status(format!(
            "unhandled authorization status '{other}'"
        ))),
    }
}
