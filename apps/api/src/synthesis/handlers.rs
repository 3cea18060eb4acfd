//! Axum route handlers for the synthesis surface.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::intake::store::latest_document;
use crate::models::prep::PrepResult;
use crate::search::gather::gather_evidence;
use crate::search::normalize::normalize_results;
use crate::search::queries::company_from_url;
use crate::state::AppState;
use crate::synthesis::synthesizer::{synthesize_prep, SynthesisInput};

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    /// Optional free-form context from the client, appended to the prompt.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Raw search results from an earlier /api/parellel call; normalized
    /// server-side before synthesis.
    #[serde(default, rename = "parallelResults")]
    pub parallel_results: Vec<Value>,
    /// Previously rendered insights the client wants folded back in.
    #[serde(default)]
    pub company_insights: Option<Value>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role_title: Option<String>,
}

/// POST /api/claude
///
/// Loads the active résumé (most recent document overall), normalizes the
/// client-supplied raw search results into evidence, and returns the
/// synthesized Prep Result directly.
pub async fn handle_synthesize(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<PrepResult>, AppError> {
    let document = latest_document(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No résumé on file — upload one first".to_string()))?;

    let evidence = normalize_results(&request.parallel_results);
    if evidence.is_empty() {
        warn!("Synthesizing with empty evidence — output will be low-confidence");
    }

    let company_owned;
    let company_name = match request.company_name.as_deref() {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => {
            company_owned = company_from_url(&document.job_url);
            Some(company_owned.as_str())
        }
    };

    let extra_context = compose_extra_context(&request);

    let result = synthesize_prep(
        &state.llm,
        SynthesisInput {
            resume_text: &document.content,
            evidence: &evidence,
            company_name,
            role_title: request.role_title.as_deref(),
            job_description: request.job_description.as_deref(),
            extra_context: extra_context.as_deref(),
        },
    )
    .await?;

    info!(
        "Synthesized prep brief with {} questions from {} evidence items",
        result.top_questions.len(),
        evidence.len()
    );

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPrepRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// POST /api/endpoints — DEPRECATED.
///
/// Retained for older dashboard builds. Runs search + synthesis keyed by
/// company and role (no résumé) and returns the canonical Prep Result
/// schema; the earlier divergent schema generation is retired.
pub async fn handle_legacy_prep(
    State(state): State<AppState>,
    Json(request): Json<LegacyPrepRequest>,
) -> Result<Json<PrepResult>, AppError> {
    let (Some(company), Some(role)) = (
        request.company_name.filter(|c| !c.trim().is_empty()),
        request.role.filter(|r| !r.trim().is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Missing 'companyName' or 'role' in request body".to_string(),
        ));
    };

    warn!("Deprecated /api/endpoints called; serving canonical prep schema");

    let evidence = gather_evidence(state.search.as_ref(), &company, Some(&role)).await;

    let result = synthesize_prep(
        &state.llm,
        SynthesisInput {
            resume_text: "(no résumé provided)",
            evidence: &evidence,
            company_name: Some(&company),
            role_title: Some(&role),
            job_description: None,
            extra_context: None,
        },
    )
    .await?;

    Ok(Json(result))
}

/// Folds the optional client-supplied prompt and prior insights into one
/// extra-context section for the synthesis prompt.
fn compose_extra_context(request: &SynthesizeRequest) -> Option<String> {
    let mut sections = Vec::new();

    if let Some(prompt) = request.prompt.as_deref() {
        if !prompt.trim().is_empty() {
            sections.push(format!("Additional context from the candidate:\n{prompt}"));
        }
    }

    if let Some(insights) = &request.company_insights {
        sections.push(format!(
            "Previously gathered company insights (verify against evidence before reuse):\n{insights}"
        ));
    }

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_synthesize_request_accepts_wire_field_names() {
        let request: SynthesizeRequest = serde_json::from_value(json!({
            "prompt": "focus on system design",
            "parallelResults": [{"title": "t", "url": "https://a.com", "content": "c"}],
            "job_description": "Own the billing pipeline.",
            "company_name": "Acme",
            "role_title": "Backend Engineer"
        }))
        .unwrap();

        assert_eq!(request.parallel_results.len(), 1);
        assert_eq!(request.company_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_extra_context_folds_prompt_and_insights() {
        let request: SynthesizeRequest = serde_json::from_value(json!({
            "prompt": "focus on system design",
            "company_insights": {"name": "Acme"}
        }))
        .unwrap();

        let extra = compose_extra_context(&request).unwrap();
        assert!(extra.contains("focus on system design"));
        assert!(extra.contains("Previously gathered company insights"));
    }

    #[test]
    fn test_extra_context_is_none_when_empty() {
        let request: SynthesizeRequest = serde_json::from_value(json!({})).unwrap();
        assert!(compose_extra_context(&request).is_none());
    }
}
