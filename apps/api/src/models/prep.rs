//! The canonical Prep Result schema returned by the synthesis routes.
//!
//! An earlier deployment carried a second, divergent schema generation for
//! the same feature; that schema is retired and this one is canonical.
//! String fields the evidence cannot support are set to "unknown" (facts)
//! or "insufficient_evidence" (assessments) by the model; numeric hiring
//! signals default to 0 when unsupported.

use serde::{Deserialize, Serialize};

/// Fixed-shape synthesis output. Ephemeral — held only in client memory
/// and localStorage for the session, never persisted server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepResult {
    #[serde(default)]
    pub what_to_expect: WhatToExpect,
    /// Exactly five questions are requested from the model. A count
    /// mismatch is passed through as-is rather than reconciled.
    #[serde(default)]
    pub top_questions: Vec<PrepQuestion>,
    #[serde(default)]
    pub company_insights_out: CompanyInsights,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatToExpect {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub source_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrepQuestion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub why: String,
    #[serde(default)]
    pub tips: String,
    #[serde(default)]
    pub predicted_difficulty: String,
    #[serde(default)]
    pub evaluation_criteria: String,
    #[serde(default)]
    pub source_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInsights {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub core_values: Vec<String>,
    #[serde(default)]
    pub recent_news: Vec<String>,
    #[serde(default)]
    pub hiring_signals: HiringSignals,
    #[serde(default)]
    pub source_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HiringSignals {
    #[serde(default)]
    pub glassdoor_difficulty: String,
    #[serde(default)]
    pub average_length_minutes: u32,
    #[serde(default)]
    pub behavioral_focus_percent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prep_result_parses_full_shape() {
        let value = json!({
            "what_to_expect": {
                "summary": "Technical + behavioral mix",
                "details": "Two rounds, one system design.",
                "source_ids": ["ev1", "ev3"]
            },
            "top_questions": [{
                "id": "q1",
                "question": "Tell me about a time you optimized a web app.",
                "category": "technical",
                "why": "Performance skills.",
                "tips": "Mention metrics.",
                "predicted_difficulty": "medium",
                "evaluation_criteria": "Specificity of the example",
                "source_ids": ["ev2"]
            }],
            "company_insights_out": {
                "name": "Acme",
                "description": "unknown",
                "core_values": ["ownership"],
                "recent_news": [],
                "hiring_signals": {
                    "glassdoor_difficulty": "3.1/5",
                    "average_length_minutes": 45,
                    "behavioral_focus_percent": 60
                },
                "source_ids": ["ev1"]
            }
        });

        let result: PrepResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.top_questions.len(), 1);
        assert_eq!(result.company_insights_out.hiring_signals.average_length_minutes, 45);
        assert_eq!(result.what_to_expect.source_ids, vec!["ev1", "ev3"]);
    }

    #[test]
    fn test_prep_result_tolerates_missing_fields() {
        // The model occasionally omits whole sections; defaults fill them in
        // rather than failing the request.
        let result: PrepResult = serde_json::from_value(json!({
            "top_questions": [{"question": "Why us?"}]
        }))
        .unwrap();

        assert_eq!(result.top_questions.len(), 1);
        assert_eq!(result.top_questions[0].question, "Why us?");
        assert!(result.what_to_expect.summary.is_empty());
        assert_eq!(result.company_insights_out.hiring_signals.average_length_minutes, 0);
    }

    #[test]
    fn test_question_count_is_not_reconciled() {
        // Three questions instead of five: passed through untouched.
        let result: PrepResult = serde_json::from_value(json!({
            "top_questions": [
                {"question": "a"}, {"question": "b"}, {"question": "c"}
            ]
        }))
        .unwrap();
        assert_eq!(result.top_questions.len(), 3);
    }
}
