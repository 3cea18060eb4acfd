// Prep Synthesizer: résumé + job details + evidence → one LLM call →
// canonical Prep Result, recovered through the response extractor.

pub mod handlers;
pub mod prompts;
pub mod synthesizer;
