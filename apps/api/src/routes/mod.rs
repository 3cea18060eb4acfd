pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;

use crate::intake;
use crate::search;
use crate::state::AppState;
use crate::synthesis;

/// Résumé PDFs run larger than the axum default body limit.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/upload", post(intake::handlers::handle_upload))
        // Path spelling is long-standing wire compatibility with deployed clients.
        .route("/api/parellel", post(search::handlers::handle_company_search))
        .route("/api/claude", post(synthesis::handlers::handle_synthesize))
        .route("/api/endpoints", post(synthesis::handlers::handle_legacy_prep))
        .route("/api/linkedin", post(search::handlers::handle_linkedin_lookup))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}
