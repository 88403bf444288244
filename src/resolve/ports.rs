use async_trait::async_trait;

use crate::{error::EngineError, resolve::types::LabelImage, selection::Token};

/// Renders a token's platform label to an image. One implementation per token
/// kind; `None` means the platform could not produce a rendering at all.
pub trait LabelRendererPort: Send + Sync {
    fn render(&self, token: &Token) -> Option<LabelImage>;
}

/// Text extraction over a rendered label. Platform-bound and may suspend for
/// a visible, non-deterministic time.
#[async_trait]
pub trait TextExtractorPort: Send + Sync {
    async fn extract_text(&self, image: &LabelImage) -> Result<String, EngineError>;
}
