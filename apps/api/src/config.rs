use anyhow::{Context, Result};

/// Default lifetime of the `aii_session` cookie, in seconds.
/// Deliberately short; tune via SESSION_TTL_SECS for longer wizard flows.
const DEFAULT_SESSION_TTL_SECS: u64 = 300;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing — external clients
/// are constructed from this, never from ad hoc env reads at call sites.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub parallel_api_key: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub session_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            parallel_api_key: require_env("PARALLEL_API_KEY")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_SECS.to_string())
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
