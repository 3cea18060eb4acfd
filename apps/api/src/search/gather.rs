//! Evidence gathering pipeline: query templating → provider call → normalization.

use serde_json::Value;
use tracing::warn;

use crate::search::client::{EvidenceSource, SearchRequest};
use crate::search::normalize::{normalize_results, EvidenceItem};
use crate::search::queries::{build_company_queries, search_objective};

/// Raw, unnormalized provider results for a company — the `/api/parellel`
/// payload. Provider failure degrades to an empty list with a warning;
/// callers treat empty evidence as valid low-confidence input, never fatal.
pub async fn raw_company_results(
    source: &dyn EvidenceSource,
    company: &str,
    role: Option<&str>,
) -> Vec<Value> {
    let request = SearchRequest::new(
        search_objective(company, role),
        build_company_queries(company),
    );

    match source.search(request).await {
        Ok(results) => results,
        Err(e) => {
            warn!("Search provider failed, continuing with empty evidence: {e}");
            Vec::new()
        }
    }
}

/// Gathers normalized evidence for a company in provider ranking order.
pub async fn gather_evidence(
    source: &dyn EvidenceSource,
    company: &str,
    role: Option<&str>,
) -> Vec<EvidenceItem> {
    let raw = raw_company_results(source, company, role).await;
    normalize_results(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::client::SearchError;
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingSource;

    #[async_trait]
    impl EvidenceSource for FailingSource {
        async fn search(&self, _request: SearchRequest) -> Result<Vec<Value>, SearchError> {
            Err(SearchError::Api {
                status: 503,
                message: "provider down".to_string(),
            })
        }
    }

    struct StaticSource(Vec<Value>);

    #[async_trait]
    impl EvidenceSource for StaticSource {
        async fn search(&self, _request: SearchRequest) -> Result<Vec<Value>, SearchError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_to_empty_evidence() {
        let evidence = gather_evidence(&FailingSource, "Acme", None).await;
        assert!(evidence.is_empty());
    }

    #[tokio::test]
    async fn test_gather_normalizes_provider_results() {
        let source = StaticSource(vec![
            json!({"title": "Acme prep", "url": "https://reddit.com/r/acme", "content": "tips"}),
            json!({"title": "Acme reviews", "url": "https://glassdoor.com/acme", "content": "3.1/5"}),
        ]);

        let evidence = gather_evidence(&source, "Acme", Some("Backend Engineer")).await;
        assert_eq!(evidence.len(), 2);
        assert_eq!(evidence[0].id, "ev1");
        assert_eq!(evidence[1].id, "ev2");
    }
}
