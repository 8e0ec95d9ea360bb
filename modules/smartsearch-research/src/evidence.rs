// Evidence normalization: converts backend-native shapes into the plain-text
// blocks handed to the reasoning component. Pure functions, no I/O.

use brightdata_client::{OrganicHit, SnapshotRecord};

/// Hard cap on search-derived evidence. Protects downstream token budgets;
/// truncation is a character cut, not word-aware.
pub const MAX_EVIDENCE_CHARS: usize = 10_000;

pub const NO_RESULTS: &str = "No results found.";

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_LINK: &str = "#";
const DEFAULT_SNIPPET: &str = "No description available";
const DEFAULT_ANSWER: &str = "No answer generated.";

/// Render organic hits as `Title:`/`Link:`/`Snippet:` blocks separated by
/// one blank line, preserving input order, capped at `MAX_EVIDENCE_CHARS`.
pub fn format_search_results(hits: &[OrganicHit]) -> String {
    if hits.is_empty() {
        return NO_RESULTS.to_string();
    }

    let blocks: Vec<String> = hits
        .iter()
        .map(|hit| {
            let title = hit.title.as_deref().unwrap_or(DEFAULT_TITLE);
            let link = hit.link.as_deref().unwrap_or(DEFAULT_LINK);
            let snippet = hit.description.as_deref().unwrap_or(DEFAULT_SNIPPET);
            format!("Title: {title}\nLink: {link}\nSnippet: {snippet}")
        })
        .collect();

    truncate_chars(blocks.join("\n\n"), MAX_EVIDENCE_CHARS)
}

/// Render a dataset job record as answer text, with a `**Sources:**` suffix
/// when the backend is citation-bearing and actually returned sources.
pub fn format_job_answer(record: &SnapshotRecord, citations: bool) -> String {
    let answer = record
        .answer_text_markdown
        .as_deref()
        .unwrap_or(DEFAULT_ANSWER);

    if citations && !record.sources.is_empty() {
        let sources: Vec<String> = record.sources.iter().map(|s| format!("- {s}")).collect();
        format!("{answer}\n\n**Sources:**\n{}", sources.join("\n"))
    } else {
        answer.to_string()
    }
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    // Byte length bounds character count, so most outputs skip the scan.
    if text.len() <= max_chars {
        return text;
    }
    text.chars().take(max_chars).collect()
}
