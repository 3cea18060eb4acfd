use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::search::client::EvidenceSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable search backend: ParallelClient in production, fakes in tests.
    pub search: Arc<dyn EvidenceSource>,
    pub llm: LlmClient,
    pub config: Config,
}
