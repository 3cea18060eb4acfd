//! Client for the Parallel.ai Search API.
//!
//! The API key and base URL are injected at construction from `Config`;
//! nothing here reads the process environment.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const PARALLEL_API_URL: &str = "https://api.parallel.ai";
const SEARCH_PATH: &str = "/v1beta/search";
/// Search processor tier. "base" is the cheapest and is plenty for prep queries.
const PROCESSOR: &str = "base";
/// Per-request result count cap.
pub const MAX_RESULTS: u32 = 10;
/// Per-result character budget requested from the provider.
pub const MAX_CHARS_PER_RESULT: u32 = 6000;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub objective: String,
    pub search_queries: Vec<String>,
    processor: &'static str,
    max_results: u32,
    max_chars_per_result: u32,
}

impl SearchRequest {
    pub fn new(objective: String, search_queries: Vec<String>) -> Self {
        Self {
            objective,
            search_queries,
            processor: PROCESSOR,
            max_results: MAX_RESULTS,
            max_chars_per_result: MAX_CHARS_PER_RESULT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Value>,
}

/// A search backend that answers an objective with raw result objects.
/// Behind a trait so handlers and tests can swap in fakes without mutating
/// process environment.
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    async fn search(&self, request: SearchRequest) -> Result<Vec<Value>, SearchError>;
}

#[derive(Clone)]
pub struct ParallelClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ParallelClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, PARALLEL_API_URL.to_string())
    }

    /// Constructor with an explicit base URL so tests can point the client
    /// at a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl EvidenceSource for ParallelClient {
    async fn search(&self, request: SearchRequest) -> Result<Vec<Value>, SearchError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, SEARCH_PATH))
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;

        debug!("Search returned {} results", body.results.len());

        Ok(body.results)
    }
}
