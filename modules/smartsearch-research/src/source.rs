// Adapters that turn one backend call into one Evidence Block. The contract
// is total: `retrieve` always returns a string, so one failed backend can
// degrade a research session but never abort it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use brightdata_client::BrightDataClient;

use crate::descriptor::{ResearchBackend, SearchBackend};
use crate::evidence;

#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Stable capability name the reasoning component dispatches on.
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Fetch evidence for a query. Transport and backend faults come back as
    /// human-readable text, never as an error.
    async fn retrieve(&self, query: &str) -> String;
}

// --- Synchronous SERP adapter ---

/// One SERP call, normalized immediately. No retry: search engines answer
/// fast enough that a retry is not worth the added latency.
pub struct SerpSource {
    name: &'static str,
    description: &'static str,
    client: Arc<BrightDataClient>,
    backend: SearchBackend,
}

impl SerpSource {
    pub fn new(
        name: &'static str,
        description: &'static str,
        client: Arc<BrightDataClient>,
        backend: SearchBackend,
    ) -> Self {
        Self {
            name,
            description,
            client,
            backend,
        }
    }

    fn effective_query(&self, query: &str) -> String {
        match &self.backend.site_filter {
            Some(site) => format!("site:{site} {query}"),
            None => query.to_string(),
        }
    }
}

#[async_trait]
impl EvidenceSource for SerpSource {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn retrieve(&self, query: &str) -> String {
        let effective = self.effective_query(query);
        match self
            .client
            .serp_search(&self.backend.zone, &self.backend.engine_url, &effective)
            .await
        {
            Ok(resp) => evidence::format_search_results(&resp.organic),
            Err(e) => {
                warn!(source = self.name, error = %e, "Search backend failed");
                format!("Error connecting to search API: {e}")
            }
        }
    }
}

// --- Asynchronous dataset-job adapter ---

/// Submit, poll until ready, fetch, normalize. The poll budget lives in the
/// client; this adapter only converts outcomes into Evidence Blocks.
pub struct DatasetJobSource {
    name: &'static str,
    description: &'static str,
    client: Arc<BrightDataClient>,
    backend: ResearchBackend,
}

impl DatasetJobSource {
    pub fn new(
        name: &'static str,
        description: &'static str,
        client: Arc<BrightDataClient>,
        backend: ResearchBackend,
    ) -> Self {
        Self {
            name,
            description,
            client,
            backend,
        }
    }
}

#[async_trait]
impl EvidenceSource for DatasetJobSource {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    async fn retrieve(&self, query: &str) -> String {
        match self
            .client
            .run_job(
                &self.backend.dataset_id,
                &self.backend.target_url,
                query,
                &self.backend.output_fields(),
            )
            .await
        {
            Ok(record) => evidence::format_job_answer(&record, self.backend.citations),
            Err(e) => {
                warn!(source = self.name, error = %e, "Dataset job backend failed");
                format!("Dataset Job Failed: {e}")
            }
        }
    }
}
