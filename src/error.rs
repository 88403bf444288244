use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineErrorKind {
    InvalidEncoding,
    TokenUnresolvable,
    AuthorizationDenied,
    RevocationFailed,
    UnrecognizedStatus,
    PlatformRejected,
    Internal,
}

/// Typed failure surfaced to the bridge layer: a kind the caller can branch on
/// plus the platform's message verbatim where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineError {
    pub kind: EngineErrorKind,
    pub message: String,
}

impl EngineError {
    pub fn new(kind: EngineErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EngineError {}

pub fn invalid_encoding(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::InvalidEncoding, message)
}

pub fn token_unresolvable(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::TokenUnresolvable, message)
}

pub fn authorization_denied(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::AuthorizationDenied, message)
}

pub fn revocation_failed(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::RevocationFailed, message)
}

pub fn unrecognized_status(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::UnrecognizedStatus, message)
}

pub fn platform_rejected(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::PlatformRejected, message)
}

pub fn internal_error(message: impl Into<String>) -> EngineError {
    EngineError::new(EngineErrorKind::Internal, message)
}
