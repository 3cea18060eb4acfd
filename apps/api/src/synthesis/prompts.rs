//! Prompts for prep synthesis.

/// Role instruction for the synthesis call. Composed at call time with the
/// shared JSON-only and evidence fragments from `llm_client::prompts`.
pub const PREP_SYSTEM: &str = "You are ParallelPrep, an expert interview \
    intelligence assistant. You turn a candidate's résumé and researched \
    evidence about a company into a focused interview preparation brief.";

/// User prompt template. Placeholders are replaced verbatim; the schema
/// block below is the canonical Prep Result shape.
pub const PREP_PROMPT_TEMPLATE: &str = r#"
Using the candidate résumé and the evidence below, synthesize a structured
interview preparation brief for:
Company: {company_name}
Role: {role_title}

Candidate résumé:
{resume_text}

Job description (may be empty):
{job_description}

Evidence — each item is tagged with an id; cite the supporting ids in every
source_ids array:
{evidence_block}

{extra_context}

Follow this schema exactly:
{
  "what_to_expect": {
    "summary": "",
    "details": "",
    "source_ids": []
  },
  "top_questions": [
    {
      "id": "",
      "question": "",
      "category": "",
      "why": "",
      "tips": "",
      "predicted_difficulty": "",
      "evaluation_criteria": "",
      "source_ids": []
    }
  ],
  "company_insights_out": {
    "name": "",
    "description": "",
    "core_values": [],
    "recent_news": [],
    "hiring_signals": {
      "glassdoor_difficulty": "",
      "average_length_minutes": 0,
      "behavioral_focus_percent": 0
    },
    "source_ids": []
  }
}

top_questions MUST contain exactly five questions tailored to the candidate.
Use 0 for numeric hiring signals the evidence does not support.
"#;
