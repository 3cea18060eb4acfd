//! Evidence normalization — one normalizer per known upstream result shape.
//!
//! Upstream search results are heterogeneous JSON objects. Rather than
//! coalescing optional fields ad hoc at every use site, each known provider
//! shape gets its own normalizer; a generic best-effort normalizer is the
//! last resort. Result ranking order from the provider is preserved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-side excerpt budget, matching the cap requested from the provider.
pub const EXCERPT_CHAR_BUDGET: usize = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Forum,
    ReviewSite,
    Blog,
    News,
    Other,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Forum => "forum",
            SourceType::ReviewSite => "review_site",
            SourceType::Blog => "blog",
            SourceType::News => "news",
            SourceType::Other => "other",
        }
    }
}

/// A uniform evidence record. Ephemeral — produced per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub source_type: SourceType,
    pub retrieved_at: DateTime<Utc>,
}

/// Recognizes one upstream result shape. Returns None when the raw object
/// is not this normalizer's shape, letting the chain fall through.
trait Normalizer {
    fn normalize(&self, raw: &Value, id: String, retrieved_at: DateTime<Utc>)
        -> Option<EvidenceItem>;
}

/// The Parallel.ai result shape: `title` and `url` are present, excerpt text
/// arrives either as an `excerpts` array or a single `content` string.
struct ParallelNormalizer;

impl Normalizer for ParallelNormalizer {
    fn normalize(
        &self,
        raw: &Value,
        id: String,
        retrieved_at: DateTime<Utc>,
    ) -> Option<EvidenceItem> {
        let url = raw.get("url")?.as_str()?.to_string();
        let title = raw.get("title")?.as_str()?.to_string();

        let excerpt = match raw.get("excerpts") {
            Some(Value::Array(parts)) => parts
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => raw.get("content")?.as_str()?.to_string(),
        };

        Some(EvidenceItem {
            id,
            title,
            source_type: classify_source(&url),
            url,
            excerpt: truncate_excerpt(excerpt),
            retrieved_at,
        })
    }
}

/// Last-resort shape: best-effort lookup across the field names other
/// providers have been seen to use, with explicit defaults.
struct GenericNormalizer;

impl Normalizer for GenericNormalizer {
    fn normalize(
        &self,
        raw: &Value,
        id: String,
        retrieved_at: DateTime<Utc>,
    ) -> Option<EvidenceItem> {
        let url = first_str(raw, &["url", "link", "sourceUrl"])
            .unwrap_or_default()
            .to_string();
        let title = first_str(raw, &["title", "sourceTitle", "name"])
            .unwrap_or("Untitled")
            .to_string();
        let excerpt = first_str(raw, &["excerpt", "content", "text", "snippet"])
            .unwrap_or_default()
            .to_string();

        Some(EvidenceItem {
            id,
            title,
            source_type: classify_source(&url),
            url,
            excerpt: truncate_excerpt(excerpt),
            retrieved_at,
        })
    }
}

/// Normalizes raw provider results into evidence records, in order.
/// Evidence ids are sequential ("ev1", "ev2", ...) so synthesis output can
/// back-reference them via `source_ids`.
pub fn normalize_results(raw_results: &[Value]) -> Vec<EvidenceItem> {
    let normalizers: [&dyn Normalizer; 2] = [&ParallelNormalizer, &GenericNormalizer];
    let retrieved_at = Utc::now();

    raw_results
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let id = format!("ev{}", index + 1);
            normalizers
                .iter()
                .find_map(|n| n.normalize(raw, id.clone(), retrieved_at))
        })
        .collect()
}

/// Classifies a result URL into a coarse source type by hostname keywords.
pub fn classify_source(url: &str) -> SourceType {
    let host = url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .unwrap_or_default();

    const FORUMS: [&str; 4] = ["reddit", "teamblind", "blind", "stackoverflow"];
    const REVIEW_SITES: [&str; 3] = ["glassdoor", "indeed", "comparably"];
    const BLOGS: [&str; 3] = ["medium", "substack", "blog"];
    const NEWS: [&str; 4] = ["techcrunch", "reuters", "bloomberg", "news"];

    if FORUMS.iter().any(|k| host.contains(k)) {
        SourceType::Forum
    } else if REVIEW_SITES.iter().any(|k| host.contains(k)) {
        SourceType::ReviewSite
    } else if BLOGS.iter().any(|k| host.contains(k)) {
        SourceType::Blog
    } else if NEWS.iter().any(|k| host.contains(k)) {
        SourceType::News
    } else {
        SourceType::Other
    }
}

fn truncate_excerpt(excerpt: String) -> String {
    if excerpt.chars().count() <= EXCERPT_CHAR_BUDGET {
        return excerpt;
    }
    excerpt.chars().take(EXCERPT_CHAR_BUDGET).collect()
}

fn first_str<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| raw.get(k).and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalizes_parallel_shape() {
        let raw = vec![json!({
            "title": "Acme interview experiences",
            "url": "https://www.glassdoor.com/Interview/Acme",
            "excerpts": ["Round one is a phone screen.", "Round two is onsite."]
        })];

        let items = normalize_results(&raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "ev1");
        assert_eq!(items[0].title, "Acme interview experiences");
        assert_eq!(items[0].source_type, SourceType::ReviewSite);
        assert_eq!(
            items[0].excerpt,
            "Round one is a phone screen.\nRound two is onsite."
        );
    }

    #[test]
    fn test_generic_normalizer_catches_unknown_shapes() {
        let raw = vec![json!({
            "sourceTitle": "Some aggregator",
            "link": "https://example.org/post",
            "snippet": "Interview takes 45 minutes."
        })];

        let items = normalize_results(&raw);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Some aggregator");
        assert_eq!(items[0].url, "https://example.org/post");
        assert_eq!(items[0].excerpt, "Interview takes 45 minutes.");
        assert_eq!(items[0].source_type, SourceType::Other);
    }

    #[test]
    fn test_generic_normalizer_defaults_missing_fields() {
        let items = normalize_results(&[json!({"irrelevant": true})]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Untitled");
        assert!(items[0].url.is_empty());
        assert!(items[0].excerpt.is_empty());
    }

    #[test]
    fn test_ranking_order_is_preserved() {
        let raw = vec![
            json!({"title": "first", "url": "https://a.com", "content": "a"}),
            json!({"title": "second", "url": "https://b.com", "content": "b"}),
            json!({"title": "third", "url": "https://c.com", "content": "c"}),
        ];

        let items = normalize_results(&raw);
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ev1", "ev2", "ev3"]);
    }

    #[test]
    fn test_excerpt_is_truncated_to_budget() {
        let long = "x".repeat(EXCERPT_CHAR_BUDGET + 500);
        let raw = vec![json!({"title": "t", "url": "https://a.com", "content": long})];

        let items = normalize_results(&raw);
        assert_eq!(items[0].excerpt.chars().count(), EXCERPT_CHAR_BUDGET);
    }

    #[test]
    fn test_classify_source_buckets() {
        assert_eq!(
            classify_source("https://www.reddit.com/r/cscareerquestions"),
            SourceType::Forum
        );
        assert_eq!(
            classify_source("https://glassdoor.com/Reviews"),
            SourceType::ReviewSite
        );
        assert_eq!(classify_source("https://medium.com/@eng"), SourceType::Blog);
        assert_eq!(
            classify_source("https://techcrunch.com/2026/01/01"),
            SourceType::News
        );
        assert_eq!(classify_source("https://acme.com/careers"), SourceType::Other);
        assert_eq!(classify_source("not a url"), SourceType::Other);
    }
}
