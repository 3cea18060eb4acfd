//! Axum route handler for the résumé upload flow.

use axum::extract::{Multipart, State};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::intake::{pdf, session, store};
use crate::state::AppState;

/// Collected multipart fields from the upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<Bytes>,
    pub job_url: String,
    pub interviewer_name: String,
    /// Accepted from the client for forward compatibility; unused server-side.
    #[allow(dead_code)]
    pub candidate_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub parsed_text: String,
    pub file_name: String,
    pub session_id: Uuid,
}

/// POST /api/upload
///
/// Accepts the résumé PDF plus job metadata, extracts text, persists the
/// document, and assigns the session cookie on first contact. The file is
/// required; nothing is written when it is missing or unreadable.
pub async fn handle_upload(
    State(state): State<AppState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Json<UploadResponse>), AppError> {
    let (session_id, is_new_session) = session::resolve_session(&jar);

    let form = collect_form(&mut multipart).await?;
    let file = require_file(&form)?.clone();

    let parsed_text = pdf::extract_text(file).await?;

    store::insert_document(
        &state.db,
        store::NewDocument {
            content: &parsed_text,
            session_id,
            job_url: &form.job_url,
            interviewer_name: &form.interviewer_name,
        },
    )
    .await?;

    info!("Stored resume document for session {session_id}");

    // Server-side identifier for the upload, mirrored back to the client.
    let file_name = Uuid::new_v4().to_string();

    let jar = if is_new_session {
        jar.add(session::session_cookie(
            session_id,
            state.config.session_ttl_secs,
        ))
    } else {
        jar
    };

    Ok((
        jar,
        Json(UploadResponse {
            parsed_text,
            file_name,
            session_id,
        }),
    ))
}

/// Pure validation seam: the upload must carry a file part.
pub fn require_file(form: &UploadForm) -> Result<&Bytes, AppError> {
    form.file
        .as_ref()
        .ok_or_else(|| AppError::Validation("No valid file uploaded.".to_string()))
}

async fn collect_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            // Either name carries the résumé; FilePond-based clients use the latter.
            "resume" | "filepond" => {
                if form.file.is_none() {
                    form.file = Some(field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("Could not read uploaded file: {e}"))
                    })?);
                }
            }
            "jobUrl" => form.job_url = read_text(field).await?,
            "interviewerName" => form.interviewer_name = read_text(field).await?,
            "candidateId" => form.candidate_id = read_text(field).await?,
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}
