use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL connection pool backing the document store and
/// verifies connectivity before the server starts accepting uploads.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to the document store")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("Document store connectivity check failed")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
