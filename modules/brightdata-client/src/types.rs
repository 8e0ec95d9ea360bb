use serde::{Deserialize, Serialize};

// --- SERP request endpoint ---

/// Structured SERP payload returned by the `/request` endpoint when the
/// target URL carries the `brd_json=1` flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SerpResponse {
    #[serde(default)]
    pub organic: Vec<OrganicHit>,
}

/// One organic (non-sponsored) search result entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganicHit {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

// --- Dataset job endpoints ---

/// One entry in the dataset trigger request body.
#[derive(Debug, Clone, Serialize)]
pub struct JobInput {
    pub url: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerResponse {
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProgressResponse {
    pub status: String,
}

/// A single result record from a dataset snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotRecord {
    pub answer_text_markdown: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}
