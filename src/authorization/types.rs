use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, invalid_encoding};

/// Consent state as the platform reports it. Owned by the platform; the
/// engine only observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorizationStatus {
    NotDetermined,
    Denied,
    Approved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    Child,
    Individual,
}

impl FromStr for MemberKind {
    type Err = EngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "child" => Ok(MemberKind::Child),
            "individual" => Ok(MemberKind::Individual),
            other => Err(invalid_encoding(format!("invalid member type '{other}'"))),
        }
    }
}
