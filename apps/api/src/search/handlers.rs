//! Axum route handlers for the search surface.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::search::client::SearchRequest;
use crate::search::gather::raw_company_results;
use crate::search::queries::company_from_url;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchRequest {
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub job_url: String,
    /// Accepted from the client; not used in query construction.
    #[serde(default)]
    #[allow(dead_code)]
    pub interviewer_name: String,
}

/// POST /api/parellel
///
/// Returns the raw search-result array for a company. The path spelling is
/// long-standing wire compatibility with deployed dashboard builds.
/// Provider failure yields an empty array, not an error.
pub async fn handle_company_search(
    State(state): State<AppState>,
    Json(request): Json<CompanySearchRequest>,
) -> Result<Json<Vec<Value>>, AppError> {
    if request.company_name.trim().is_empty() && request.job_url.trim().is_empty() {
        return Err(AppError::Validation(
            "companyName or jobUrl is required".to_string(),
        ));
    }

    let company = if request.company_name.trim().is_empty() {
        company_from_url(&request.job_url)
    } else {
        request.company_name.trim().to_string()
    };

    let results = raw_company_results(state.search.as_ref(), &company, None).await;

    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
pub struct LinkedinRequest {
    pub url: String,
}

/// POST /api/linkedin
///
/// Helper lookup for a LinkedIn profile; not wired into the dashboard.
/// Degrades to an empty array on provider failure, matching the search route.
pub async fn handle_linkedin_lookup(
    State(state): State<AppState>,
    Json(request): Json<LinkedinRequest>,
) -> Result<Json<Vec<Value>>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url is required".to_string()));
    }

    let search_request = SearchRequest::new(
        format!(
            "Find the most information you can about this LinkedIn profile: {}",
            request.url
        ),
        vec![request.url.clone()],
    );

    let results = match state.search.search(search_request).await {
        Ok(results) => results,
        Err(e) => {
            warn!("LinkedIn lookup failed, returning empty results: {e}");
            Vec::new()
        }
    };

    Ok(Json(results))
}
