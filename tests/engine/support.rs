use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use screenguard::{
    authorization::{AuthorizationPort, MemberKind, RawStatusStream, WatchAuthorizationPort},
    engine::ScreenTimeEngine,
    error::EngineError,
    history::RecordingWebHistory,
    monitoring::{ActivitySchedulerPort, RecordingScheduler},
    resolve::{LabelImage, LabelRendererPort, ResolveConfig, TextExtractorPort},
    selection::Token,
    shield::InMemoryShieldStore,
};

/// Renders every token's data as its label text.
pub struct EchoRenderer;

impl LabelRendererPort for EchoRenderer {
    fn render(&self, token: &Token) -> Option<LabelImage> {
        Some(LabelImage {
            width: 120,
            height: 24,
            bytes: token.data.as_bytes().to_vec(),
        })
    }
}

/// Extracts exactly the rendered label text.
pub struct EchoExtractor;

#[async_trait]
impl TextExtractorPort for EchoExtractor {
    async fn extract_text(&self, image: &LabelImage) -> Result<String, EngineError> {
        Ok(String::from_utf8(image.bytes.clone()).expect("test labels are utf8"))
    }
}

/// Records every consent request so tests can assert the platform was (or was
/// not) reached.
#[derive(Default)]
pub struct RecordingAuthorizationPort {
    pub requests: Mutex<Vec<MemberKind>>,
}

#[async_trait]
impl AuthorizationPort for RecordingAuthorizationPort {
    async fn request_authorization(&self, member: MemberKind) -> Result<(), String> {
        self.requests.lock().expect("requests lock").push(member);
        Ok(())
    }

    async fn revoke_authorization(&self) -> Result<(), String> {
        Ok(())
    }

    fn status_stream(&self) -> RawStatusStream {
        Box::pin(futures_util::stream::repeat("approved".to_string()))
    }
}

pub struct EngineHarness {
    pub engine: ScreenTimeEngine,
    pub shield_store: Arc<InMemoryShieldStore>,
    pub authorization: Arc<WatchAuthorizationPort>,
    pub history: Arc<RecordingWebHistory>,
    pub scheduler: Arc<RecordingScheduler>,
}

/// Engine wired like `build_engine`, with the scheduler swapped out.
pub fn build_engine_with_scheduler(scheduler: Arc<dyn ActivitySchedulerPort>) -> ScreenTimeEngine {
    ScreenTimeEngine::new(
        Arc::new(InMemoryShieldStore::new()),
        Arc::new(EchoRenderer),
        Arc::new(EchoRenderer),
        Arc::new(EchoExtractor),
        Arc::new(WatchAuthorizationPort::default()),
        Arc::new(RecordingWebHistory::new()),
        scheduler,
        ResolveConfig {
            max_attempts: 4,
            pacing_ms: 1,
        },
    )
    .expect("engine should initialize")
}

pub fn build_engine() -> EngineHarness {
    let shield_store = Arc::new(InMemoryShieldStore::new());
    let authorization = Arc::new(WatchAuthorizationPort::default());
    let history = Arc::new(RecordingWebHistory::new());
    let scheduler = Arc::new(RecordingScheduler::new());

    let engine = ScreenTimeEngine::new(
        Arc::clone(&shield_store) as _,
        Arc::new(EchoRenderer),
        Arc::new(EchoRenderer),
        Arc::new(EchoExtractor),
        Arc::clone(&authorization) as _,
        Arc::clone(&history) as _,
        Arc::clone(&scheduler) as _,
        ResolveConfig {
            max_attempts: 4,
            pacing_ms: 1,
        },
    )
    .expect("engine should initialize");

    EngineHarness {
        engine,
        shield_store,
        authorization,
        history,
        scheduler,
    }
}
