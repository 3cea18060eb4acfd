//! Query templating and company-name derivation for the evidence gatherer.

use url::Url;

/// Parallel.ai accepts at most this many queries per request.
pub const MAX_QUERIES: usize = 5;

const COMPANY_FALLBACK: &str = "the Company";

/// Builds the candidate query list for a company. The template list is
/// longer than the provider limit on purpose; the tail is truncated.
pub fn build_company_queries(company: &str) -> Vec<String> {
    let candidates = [
        format!("{company} interview process"),
        format!("{company} interview questions"),
        format!("{company} interview preparation tips"),
        format!("{company} coding interview questions"),
        format!("{company} behavioral interview questions"),
        format!("{company} glassdoor interview reviews"),
    ];

    candidates.into_iter().take(MAX_QUERIES).collect()
}

/// The natural-language objective sent alongside the queries.
pub fn search_objective(company: &str, role: Option<&str>) -> String {
    let role = role.unwrap_or("the posted role");
    format!(
        "Find the interview process, common questions, and preparation tips \
         for {role} interviews at {company}. Prefer sources from Reddit, \
         Glassdoor, Blind, and the company's engineering blog."
    )
}

/// Derives a display company name from a job-posting URL: the first
/// hostname label after stripping a leading `www.`, first letter
/// uppercased. Unparseable input falls back to "the Company".
pub fn company_from_url(job_url: &str) -> String {
    let Ok(parsed) = Url::parse(job_url) else {
        return COMPANY_FALLBACK.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return COMPANY_FALLBACK.to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);
    let label = host.split('.').next().unwrap_or("");
    if label.is_empty() {
        return COMPANY_FALLBACK.to_string();
    }

    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => COMPANY_FALLBACK.to_string(),
    }
}
