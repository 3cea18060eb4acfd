// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with a single valid JSON object and nothing else. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT use any tools. \
    Do NOT include explanations or apologies.";

/// Common instruction appended to all synthesis prompts.
pub const EVIDENCE_INSTRUCTION: &str = "\
    CRITICAL: Every claim you generate must be traceable to a specific evidence ID \
    provided in the context. Do NOT infer, interpolate, or invent details. \
    Tag every output field with its supporting `source_ids`. \
    Where the evidence does not support a field, set it to \"unknown\" \
    (for facts) or \"insufficient_evidence\" (for assessments) instead of guessing.";
