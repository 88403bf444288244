use crate::{error::EngineError, history::types::HistoryInterval};

/// Platform browsing-history store. Pure pass-through: refusals come back as
/// `PlatformRejected` with the platform's message. The optional identifier
/// scopes the deletion to one browser bundle.
pub trait WebHistoryPort: Send + Sync {
    fn delete_all(&self, identifier: Option<&str>) -> Result<(), EngineError>;

    fn delete_during(
        &self,
        interval: &HistoryInterval,
        identifier: Option<&str>,
    ) -> Result<(), EngineError>;

    fn delete_for_url(&self, url: &str, identifier: Option<&str>) -> Result<(), EngineError>;
}
