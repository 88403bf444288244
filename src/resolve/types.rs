use serde::{Deserialize, Serialize};

use crate::selection::Token;

/// Rendered label bitmap handed to text extraction. Opaque to the pipeline;
/// the renderer decides the encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelImage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// One resolved display name; position in the output matches the token's
/// position in the input batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedName {
    pub token: Token,
    pub name: String,
}

fn default_max_attempts() -> u32 {
    4
}

fn default_pacing_ms() -> u64 {
    200
}

/// Retry budget for one token. The pacing delay gives the renderer settling
/// time between attempts; it is not a network backoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            pacing_ms: default_pacing_ms(),
        }
    }
}
