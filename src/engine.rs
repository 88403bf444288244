use std::sync::Arc;

use serde_json::Value;

use crate::{
    authorization::{
        AuthorizationGate, AuthorizationPort, AuthorizationStatus, MemberKind, StatusStream,
    },
    error::EngineError,
    history::{HistoryInterval, WebHistoryPort},
    monitoring::{ActivitySchedulerPort, MonitoringWindow, TimeOfDay},
    resolve::{
        LabelRendererPort, NameResolutionPipeline, ResolveConfig, ResolvedName, TextExtractorPort,
    },
    selection::{SelectionRecord, SelectionStore, Token, codec},
    shield::{ShieldConfigurator, ShieldStorePort},
};

/// Single-owner engine facade. Constructed once at process start; every
/// exposed operation maps to a success value or an `EngineError` the bridge
/// layer can present.
pub struct ScreenTimeEngine {
    store: SelectionStore,
    shield: Arc<ShieldConfigurator>,
    pipeline: NameResolutionPipeline,
    gate: AuthorizationGate,
    history: Arc<dyn WebHistoryPort>,
    scheduler: Arc<dyn ActivitySchedulerPort>,
}

impl ScreenTimeEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shield_store: Arc<dyn ShieldStorePort>,
        application_renderer: Arc<dyn LabelRendererPort>,
        category_renderer: Arc<dyn LabelRendererPort>,
        extractor: Arc<dyn TextExtractorPort>,
        authorization: Arc<dyn AuthorizationPort>,
        history: Arc<dyn WebHistoryPort>,
        scheduler: Arc<dyn ActivitySchedulerPort>,
        resolve_config: ResolveConfig,
    ) -> Result<Self, EngineError> {
        let shield = Arc::new(ShieldConfigurator::new(shield_store));
        // App removal starts denied, matching the enforcement store's
        // startup posture.
        shield.set_deny_app_removal(true)?;

        let engine = Self {
            store: SelectionStore::new(Arc::clone(&shield)),
            shield,
            pipeline: NameResolutionPipeline::new(
                application_renderer,
                category_renderer,
                extractor,
                resolve_config,
            ),
            gate: AuthorizationGate::new(authorization),
            history,
            scheduler,
        };
        tracing::info!(target: "engine", "engine_initialized");
        Ok(engine)
    }

    // authorization

    pub async fn get_authorization_status(&self) -> Result<AuthorizationStatus, EngineError> {
        self.gate.current_status().await
    }

    /// Member kind is validated before any platform call is made.
    pub async fn request_authorization(&self, member: &str) -> Result<(), EngineError> {
        let member: MemberKind = member.parse()?;
        self.gate.request_authorization(member).await
    }

    pub async fn revoke_authorization(&self) -> Result<(), EngineError> {
        self.gate.revoke_authorization().await
    }

    pub fn observe_authorization_status(&self) -> StatusStream {
        self.gate.observe_status()
    }

    // selection

    pub async fn get_selection(&self) -> SelectionRecord {
        codec::encode(&self.store.get_selection().await)
    }

    pub async fn set_selection(&self, record: &Value) -> Result<(), EngineError> {
        self.store.set_encoded(record).await
    }

    pub async fn clear_selection(&self) -> Result<(), EngineError> {
        self.store.clear_selection().await
    }

    // enforcement store toggles

    pub fn deny_app_removal(&self) -> Result<(), EngineError> {
        self.shield.set_deny_app_removal(true)
    }

    pub fn allow_app_removal(&self) -> Result<(), EngineError> {
        self.shield.set_deny_app_removal(false)
    }

    pub fn deny_app_installation(&self) -> Result<(), EngineError> {
        self.shield.set_deny_app_installation(true)
    }

    pub fn allow_app_installation(&self) -> Result<(), EngineError> {
        self.shield.set_deny_app_installation(false)
    }

    // monitoring

    pub fn initialize_monitoring(&self, start: &str, end: &str) -> Result<(), EngineError> {
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        let window = MonitoringWindow::daily(start, end);
        self.scheduler.start_monitoring(window)?;
        tracing::info!(target: "engine", ?window, "monitoring_started");
        Ok(())
    }

    // name resolution

    pub async fn resolve_application_name(&self, token: &str) -> Result<ResolvedName, EngineError> {
        self.pipeline.resolve_one(&Token::application(token)).await
    }

    pub async fn resolve_application_names(
        &self,
        tokens: &[String],
    ) -> Result<Vec<ResolvedName>, EngineError> {
        let tokens: Vec<Token> = tokens
            .iter()
            .map(|data| Token::application(data.clone()))
            .collect();
        self.pipeline.resolve(&tokens).await
    }

    pub async fn resolve_category_name(&self, token: &str) -> Result<ResolvedName, EngineError> {
        self.pipeline.resolve_one(&Token::category(token)).await
    }

    pub async fn resolve_category_names(
        &self,
        tokens: &[String],
    ) -> Result<Vec<ResolvedName>, EngineError> {
        let tokens: Vec<Token> = tokens
            .iter()
            .map(|data| Token::category(data.clone()))
            .collect();
        self.pipeline.resolve(&tokens).await
    }

    // web history

    pub fn delete_all_web_history(&self, identifier: Option<&str>) -> Result<(), EngineError> {
        self.history.delete_all(identifier)
    }

    pub fn delete_web_history_during(
        &self,
        interval: &Value,
        identifier: Option<&str>,
    ) -> Result<(), EngineError> {
        let interval = HistoryInterval::decode(interval)?;
        self.history.delete_during(&interval, identifier)
    }

    pub fn delete_web_history_for_url(
        &self,
        url: &str,
        identifier: Option<&str>,
    ) -> Result<(), EngineError> {
        self.history.delete_for_url(url, identifier)
    }
}
