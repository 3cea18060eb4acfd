use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored résumé document. Created on intake; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub content: String,
    pub session_id: Uuid,
    pub job_url: String,
    pub interviewer_name: String,
    pub created_at: DateTime<Utc>,
}
