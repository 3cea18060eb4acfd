//! PDF text extraction for uploaded résumés.

use bytes::Bytes;

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF.
///
/// `pdf-extract` is synchronous, so the work runs on the blocking pool.
/// Reports exactly one terminal outcome: the extracted text, or an error
/// that callers surface before any database write happens.
pub async fn extract_text(bytes: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task panicked: {e}")))?
        .map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not extract text from PDF: {e}"))
        })?;

    Ok(text)
}
