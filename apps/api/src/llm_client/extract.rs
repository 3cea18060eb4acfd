//! Response extractor — recovers a single JSON object from free-form model
//! output that may be wrapped in prose, Markdown code fences, or partial
//! commentary.
//!
//! Three tiers, tried in order on one candidate string:
//! 1. content of the first triple-backtick fenced block (optionally tagged
//!    `json`), else the trimmed whole text;
//! 2. direct parse of the candidate;
//! 3. slice from the first `{` to the last `}` and parse that.
//!
//! Tier 3 is a deliberate heuristic: nested braces inside string values and
//! multiple top-level objects are not handled. Keep it that way — callers
//! depend on the failure being explicit rather than a tolerant parse.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no valid JSON found in model output")]
    NoJson,
}

/// Produces the parsed JSON object contained in `text`, or fails explicitly.
/// Never returns a silent empty object — callers surface the error.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let candidate = fenced_block(text).unwrap_or_else(|| text.trim());

    // Common, well-behaved case: the candidate is the object.
    if let Ok(value) = serde_json::from_str::<Value>(candidate) {
        return Ok(value);
    }

    // Brace-slice fallback for prose-wrapped objects.
    if let (Some(open), Some(close)) = (candidate.find('{'), candidate.rfind('}')) {
        if close > open {
            if let Ok(value) = serde_json::from_str::<Value>(&candidate[open..=close]) {
                return Ok(value);
            }
        }
    }

    Err(ExtractError::NoJson)
}

/// Content of the first triple-backtick fenced block, with an optional
/// `json` language tag stripped.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let inner = &text[start + 3..];
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    let end = inner.find("```")?;
    Some(inner[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_from_tagged_fence() {
        let input = "Sure! ```json\n{\"a\":1}\n```";
        assert_eq!(extract_json(input).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_extracts_from_bare_fence() {
        let input = "```\n{\"a\": 1, \"b\": [2, 3]}\n```";
        assert_eq!(extract_json(input).unwrap(), json!({"a": 1, "b": [2, 3]}));
    }

    #[test]
    fn test_extracts_plain_json() {
        let input = "  {\"key\": \"value\"}  ";
        assert_eq!(extract_json(input).unwrap(), json!({"key": "value"}));
    }

    #[test]
    fn test_brace_slice_recovers_prose_wrapped_object() {
        let input = "here is your result: {\"a\":1} — hope that helps";
        assert_eq!(extract_json(input).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_brace_slice_handles_nested_objects() {
        let input = "Result: {\"outer\": {\"inner\": 1}} done.";
        assert_eq!(
            extract_json(input).unwrap(),
            json!({"outer": {"inner": 1}})
        );
    }

    #[test]
    fn test_fails_without_braces() {
        let err = extract_json("no structured data here").unwrap_err();
        assert_eq!(err, ExtractError::NoJson);
    }

    #[test]
    fn test_fails_on_reversed_braces() {
        let err = extract_json("} backwards {").unwrap_err();
        assert_eq!(err, ExtractError::NoJson);
    }

    #[test]
    fn test_fence_candidate_is_authoritative() {
        // Once a fence is found, its content is the only candidate — prose
        // outside the fence is never consulted.
        let input = "{\"outside\": true} ```json\n{\"inside\": true}\n```";
        assert_eq!(extract_json(input).unwrap(), json!({"inside": true}));
    }

    #[test]
    fn test_multiple_top_level_objects_stay_unparsed() {
        // Known limitation of the brace-slice heuristic: the slice spans
        // both objects and fails to parse.
        let err = extract_json("{\"a\":1} and also {\"b\":2}").unwrap_err();
        assert_eq!(err, ExtractError::NoJson);
    }
}
