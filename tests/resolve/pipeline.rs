use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use async_trait::async_trait;
use screenguard::{
    error::{EngineError, EngineErrorKind},
    resolve::{
        LabelImage, LabelRendererPort, NameResolutionPipeline, ResolveConfig, TextExtractorPort,
    },
    selection::Token,
};

fn label_for(token_data: &str) -> LabelImage {
    LabelImage {
        width: 120,
        height: 24,
        bytes: token_data.as_bytes().to_vec(),
    }
}

/// Renders every token except the ones it was told to refuse; counts renders
/// per token so retry behavior is observable.
#[derive(Default)]
struct ScriptedRenderer {
    refuse: Option<String>,
    render_counts: Mutex<HashMap<String, u32>>,
}

impl ScriptedRenderer {
    fn refusing(token_data: &str) -> Self {
        Self {
            refuse: Some(token_data.to_string()),
            render_counts: Mutex::new(HashMap::new()),
        }
    }

    fn renders_of(&self, token_data: &str) -> u32 {
        self.render_counts
            .lock()
            .expect("render counts lock")
            .get(token_data)
            .copied()
            .unwrap_or(0)
    }
}

impl LabelRendererPort for ScriptedRenderer {
    fn render(&self, token: &Token) -> Option<LabelImage> {
        *self
            .render_counts
            .lock()
            .expect("render counts lock")
            .entry(token.data.clone())
            .or_insert(0) += 1;
        if self.refuse.as_deref() == Some(token.data.as_str()) {
            return None;
        }
        Some(label_for(&token.data))
    }
}

/// Replays a per-label script of extraction results; once a script runs out,
/// extraction echoes the label text. An optional delay per label simulates the
/// platform's variable extraction time.
#[derive(Default)]
struct ScriptedExtractor {
    scripts: Mutex<HashMap<String, Vec<String>>>,
    delays: HashMap<String, Duration>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedExtractor {
    fn with_script(token_data: &str, outputs: &[&str]) -> Self {
        let extractor = Self::default();
        extractor.scripts.lock().expect("scripts lock").insert(
            token_data.to_string(),
            outputs.iter().rev().map(|text| text.to_string()).collect(),
        );
        extractor
    }

    fn with_delay(mut self, token_data: &str, delay: Duration) -> Self {
        self.delays.insert(token_data.to_string(), delay);
        self
    }

    fn seen_labels(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

#[async_trait]
impl TextExtractorPort for ScriptedExtractor {
    async fn extract_text(&self, image: &LabelImage) -> Result<String, EngineError> {
        let label = String::from_utf8(image.bytes.clone()).expect("test labels are utf8");
        self.seen.lock().expect("seen lock").push(label.clone());
        if let Some(delay) = self.delays.get(&label) {
            tokio::time::sleep(*delay).await;
        }
        let scripted = self
            .scripts
            .lock()
            .expect("scripts lock")
            .get_mut(&label)
            .and_then(Vec::pop);
        Ok(scripted.unwrap_or(label))
    }
}

fn fast_config() -> ResolveConfig {
    ResolveConfig {
        max_attempts: 4,
        pacing_ms: 1,
    }
}

fn build_pipeline(
    renderer: Arc<ScriptedRenderer>,
    extractor: Arc<ScriptedExtractor>,
    config: ResolveConfig,
) -> NameResolutionPipeline {
    NameResolutionPipeline::new(
        Arc::clone(&renderer) as Arc<dyn LabelRendererPort>,
        renderer,
        extractor,
        config,
    )
}

#[tokio::test]
async fn batch_output_preserves_input_order() {
    let renderer = Arc::new(ScriptedRenderer::default());
    // The first token extracts slowest; order must still follow the input.
    let extractor = Arc::new(
        ScriptedExtractor::default()
            .with_delay("app-slow", Duration::from_millis(40))
            .with_delay("app-mid", Duration::from_millis(10)),
    );
    let pipeline = build_pipeline(renderer, extractor, fast_config());

    let tokens = vec![
        Token::application("app-slow"),
        Token::application("app-mid"),
        Token::application("app-fast"),
    ];
    let names = pipeline.resolve(&tokens).await.expect("batch should resolve");

    let resolved: Vec<&str> = names.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(resolved, ["app-slow", "app-mid", "app-fast"]);
    assert_eq!(names[0].token, tokens[0]);
    assert_eq!(names[2].token, tokens[2]);
}

#[tokio::test]
async fn success_on_exactly_the_fourth_attempt() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let extractor = Arc::new(ScriptedExtractor::with_script(
        "app-a",
        &["", "", "", "Maps"],
    ));
    let pipeline = build_pipeline(Arc::clone(&renderer), extractor, fast_config());

    let name = pipeline
        .resolve_one(&Token::application("app-a"))
        .await
        .expect("fourth attempt should succeed");
    assert_eq!(name.name, "Maps");
    assert_eq!(renderer.renders_of("app-a"), 4, "re-rendered per attempt");
}

#[tokio::test]
async fn exhausted_retries_fail_the_whole_batch() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let extractor = Arc::new(ScriptedExtractor::with_script(
        "app-bad",
        &["", "", "", ""],
    ));
    let pipeline = build_pipeline(Arc::clone(&renderer), Arc::clone(&extractor), fast_config());

    let tokens = vec![
        Token::application("app-good"),
        Token::application("app-bad"),
        Token::application("app-later"),
    ];
    let err = pipeline
        .resolve(&tokens)
        .await
        .expect_err("all-empty token must fail the batch");
    assert_eq!(err.kind, EngineErrorKind::TokenUnresolvable);
    assert_eq!(renderer.renders_of("app-bad"), 4);
    // All-or-nothing: the token after the failure was never touched.
    assert!(!extractor.seen_labels().contains(&"app-later".to_string()));
}

#[tokio::test]
async fn render_failure_fails_fast_without_retry() {
    let renderer = Arc::new(ScriptedRenderer::refusing("app-broken"));
    let extractor = Arc::new(ScriptedExtractor::default());
    let pipeline = build_pipeline(Arc::clone(&renderer), extractor, fast_config());

    let err = pipeline
        .resolve(&[Token::application("app-broken")])
        .await
        .expect_err("render refusal must fail");
    assert_eq!(err.kind, EngineErrorKind::TokenUnresolvable);
    assert_eq!(renderer.renders_of("app-broken"), 1, "no retry on render miss");
}

#[tokio::test]
async fn web_domain_tokens_are_unresolvable() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let extractor = Arc::new(ScriptedExtractor::default());
    let pipeline = build_pipeline(renderer, extractor, fast_config());

    let err = pipeline
        .resolve_one(&Token::web_domain("example.com"))
        .await
        .expect_err("web domains have no renderer");
    assert_eq!(err.kind, EngineErrorKind::TokenUnresolvable);
}

#[tokio::test]
async fn retries_are_paced() {
    let renderer = Arc::new(ScriptedRenderer::default());
    let extractor = Arc::new(ScriptedExtractor::with_script(
        "app-a",
        &["", "", "", "Maps"],
    ));
    let pipeline = build_pipeline(
        renderer,
        extractor,
        ResolveConfig {
            max_attempts: 4,
            pacing_ms: 50,
        },
    );

    let started = Instant::now();
    pipeline
        .resolve_one(&Token::application("app-a"))
        .await
        .expect("fourth attempt should succeed");
    assert!(
        started.elapsed() >= Duration::from_millis(150),
        "three pacing delays should elapse"
    );
}

#[tokio::test]
async fn category_tokens_use_the_category_renderer() {
    let application_renderer = Arc::new(ScriptedRenderer::refusing("cat-games"));
    let category_renderer = Arc::new(ScriptedRenderer::default());
    let extractor = Arc::new(ScriptedExtractor::default());
    let pipeline = NameResolutionPipeline::new(
        application_renderer,
        Arc::clone(&category_renderer) as Arc<dyn LabelRendererPort>,
        extractor,
        fast_config(),
    );

    let name = pipeline
        .resolve_one(&Token::category("cat-games"))
        .await
        .expect("category renderer should serve category tokens");
    assert_eq!(name.name, "cat-games");
    assert_eq!(category_renderer.renders_of("cat-games"), 1);
}
