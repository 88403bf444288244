use std::sync::Arc;

use tokio::time::{Duration, sleep};

use crate::{
    error::{EngineError, token_unresolvable},
    resolve::{
        ports::{LabelRendererPort, TextExtractorPort},
        types::{ResolveConfig, ResolvedName},
    },
    selection::{Token, TokenKind},
};

/// Turns opaque tokens into display names by rendering each token's label and
/// running text extraction on the rendering.
///
/// Tokens are processed strictly one at a time. Concurrent renders against the
/// platform pipeline produced corrupted or empty extractions, so the batch is
/// a single sequential chain and output order is always input order.
pub struct NameResolutionPipeline {
    application_renderer: Arc<dyn LabelRendererPort>,
    category_renderer: Arc<dyn LabelRendererPort>,
    extractor: Arc<dyn TextExtractorPort>,
    config: ResolveConfig,
}

impl NameResolutionPipeline {
    pub fn new(
        application_renderer: Arc<dyn LabelRendererPort>,
        category_renderer: Arc<dyn LabelRendererPort>,
        extractor: Arc<dyn TextExtractorPort>,
        config: ResolveConfig,
    ) -> Self {
        Self {
            application_renderer,
            category_renderer,
            extractor,
            config,
        }
    }

    /// Resolve a batch, preserving input order. All-or-nothing: a token that
    /// cannot be rendered, or that extracts empty on every attempt, fails the
    /// whole call and no partial results are returned.
    pub async fn resolve(&self, tokens: &[Token]) -> Result<Vec<ResolvedName>, EngineError> {
        let mut names = Vec::with_capacity(tokens.len());
        for token in tokens {
            let name = self.resolve_one(token).await?;
            names.push(name);
        }
        Ok(names)
    }

    pub async fn resolve_one(&self, token: &Token) -> Result<ResolvedName, EngineError> {
        let renderer = self.renderer_for(token)?;
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            // Re-render on every attempt: an empty extraction usually means
            // the renderer had not settled yet.
            let Some(image) = renderer.render(token) else {
                return Err(token_unresolvable("unable to render token label"));
            };

            let text = self.extractor.extract_text(&image).await?;
            if !text.is_empty() {
                return Ok(ResolvedName {
                    token: token.clone(),
                    name: text,
                });
            }

            tracing::debug!(
                target: "resolve",
                kind = ?token.kind,
                attempt,
                max_attempts,
                "label_extraction_empty"
            );
            if attempt < max_attempts {
                sleep(Duration::from_millis(self.config.pacing_ms)).await;
            }
        }

        Err(token_unresolvable(format!(
            "label extraction stayed empty after {max_attempts} attempts"
        )))
    }

    fn renderer_for(&self, token: &Token) -> Result<&Arc<dyn LabelRendererPort>, EngineError> {
        match token.kind {
            TokenKind::Application => Ok(&self.application_renderer),
            TokenKind::Category => Ok(&self.category_renderer),
            TokenKind::WebDomain => Err(token_unresolvable(
                "web domain tokens have no label renderer",
            )),
        }
    }
}
