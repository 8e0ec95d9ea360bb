// The tool surface: fixed, named capability bindings plus bounded fan-out.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use brightdata_client::BrightDataClient;

use crate::descriptor::{ResearchBackend, SearchBackend};
use crate::source::{DatasetJobSource, EvidenceSource, SerpSource};

pub const WEB_SEARCH: &str = "web-search";
pub const DISCUSSION_SEARCH: &str = "discussion-search";
pub const DEEP_RESEARCH: &str = "deep-research";

const GOOGLE_SEARCH_URL: &str = "https://google.com/search";
const PERPLEXITY_URL: &str = "https://www.perplexity.ai";
const DISCUSSION_SITE: &str = "reddit.com";

/// In-flight limit for `gather`. Three registered backends today, so this
/// only matters if the registry grows.
const MAX_CONCURRENT_RETRIEVALS: usize = 3;

/// Evidence from one backend, labeled with the capability that produced it.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub source: String,
    pub text: String,
}

pub struct ToolRegistry {
    sources: Vec<Arc<dyn EvidenceSource>>,
}

impl ToolRegistry {
    pub fn new(sources: Vec<Arc<dyn EvidenceSource>>) -> Self {
        Self { sources }
    }

    /// The three statically declared capabilities: general web search,
    /// forum-restricted web search, and citation-bearing deep research.
    pub fn builtin(
        client: Arc<BrightDataClient>,
        serp_zone: &str,
        research_dataset_id: &str,
    ) -> Self {
        let web_search = SerpSource::new(
            WEB_SEARCH,
            "Finds facts using web search.",
            client.clone(),
            SearchBackend {
                zone: serp_zone.to_string(),
                engine_url: GOOGLE_SEARCH_URL.to_string(),
                site_filter: None,
            },
        );

        let discussion_search = SerpSource::new(
            DISCUSSION_SEARCH,
            "Finds discussions and opinions in forum threads.",
            client.clone(),
            SearchBackend {
                zone: serp_zone.to_string(),
                engine_url: GOOGLE_SEARCH_URL.to_string(),
                site_filter: Some(DISCUSSION_SITE.to_string()),
            },
        );

        let deep_research = DatasetJobSource::new(
            DEEP_RESEARCH,
            "Runs an AI research backend for deep answers with citations.",
            client,
            ResearchBackend {
                dataset_id: research_dataset_id.to_string(),
                target_url: PERPLEXITY_URL.to_string(),
                citations: true,
            },
        );

        Self::new(vec![
            Arc::new(web_search),
            Arc::new(discussion_search),
            Arc::new(deep_research),
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn EvidenceSource>> {
        self.sources.iter().find(|s| s.name() == name)
    }

    pub fn sources(&self) -> &[Arc<dyn EvidenceSource>] {
        &self.sources
    }

    /// Query every registered backend concurrently with a bounded in-flight
    /// limit. Results come back in registration order regardless of which
    /// backend finished first.
    pub async fn gather(&self, query: &str) -> Vec<Evidence> {
        let calls: Vec<_> = self
            .sources
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, source)| {
                let query = query.to_string();
                async move {
                    let text = source.retrieve(&query).await;
                    (
                        idx,
                        Evidence {
                            source: source.name().to_string(),
                            text,
                        },
                    )
                }
            })
            .collect();

        let mut results: Vec<(usize, Evidence)> = stream::iter(calls)
            .buffer_unordered(MAX_CONCURRENT_RETRIEVALS)
            .collect()
            .await;
        results.sort_by_key(|(idx, _)| *idx);
        results.into_iter().map(|(_, evidence)| evidence).collect()
    }
}
