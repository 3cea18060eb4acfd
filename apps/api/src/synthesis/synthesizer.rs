//! Prep synthesis — composes résumé text, job details, and evidence into a
//! single LLM call and recovers the canonical Prep Result.

use crate::errors::AppError;
use crate::llm_client::prompts::{EVIDENCE_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::prep::PrepResult;
use crate::search::normalize::EvidenceItem;
use crate::synthesis::prompts::{PREP_PROMPT_TEMPLATE, PREP_SYSTEM};

/// Inputs for one synthesis call. Everything but the résumé is optional;
/// absent values are rendered as explicit placeholders in the prompt.
#[derive(Debug, Default)]
pub struct SynthesisInput<'a> {
    pub resume_text: &'a str,
    pub evidence: &'a [EvidenceItem],
    pub company_name: Option<&'a str>,
    pub role_title: Option<&'a str>,
    pub job_description: Option<&'a str>,
    pub extra_context: Option<&'a str>,
}

/// Runs the synthesis call and parses the extracted object into the
/// canonical schema. The question count is NOT reconciled here: the model
/// is asked for exactly five, and whatever it returns passes through.
pub async fn synthesize_prep(
    llm: &LlmClient,
    input: SynthesisInput<'_>,
) -> Result<PrepResult, AppError> {
    let system = format!("{PREP_SYSTEM} {JSON_ONLY_SYSTEM} {EVIDENCE_INSTRUCTION}");
    let prompt = build_prompt(&input);

    llm.call_json::<PrepResult>(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Prep synthesis failed: {e}")))
}

fn build_prompt(input: &SynthesisInput<'_>) -> String {
    PREP_PROMPT_TEMPLATE
        .replace("{company_name}", input.company_name.unwrap_or("unknown"))
        .replace("{role_title}", input.role_title.unwrap_or("unknown"))
        .replace("{resume_text}", input.resume_text)
        .replace("{job_description}", input.job_description.unwrap_or(""))
        .replace("{evidence_block}", &evidence_block(input.evidence))
        .replace("{extra_context}", input.extra_context.unwrap_or(""))
}

/// Renders the evidence sequence as a numbered block the model can cite.
/// An empty sequence is rendered as an explicit marker so the model marks
/// unsupported fields instead of inventing them.
pub fn evidence_block(evidence: &[EvidenceItem]) -> String {
    if evidence.is_empty() {
        return "(no evidence retrieved — mark unsupported fields \"unknown\" or \"insufficient_evidence\")"
            .to_string();
    }

    evidence
        .iter()
        .map(|e| {
            format!(
                "[{}] {} — {} ({})\n{}",
                e.id,
                e.title,
                e.url,
                e.source_type.as_str(),
                e.excerpt
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
