pub mod error;
pub mod types;

pub use error::{BrightDataError, Result};
pub use types::{
    JobInput, OrganicHit, ProgressResponse, SerpResponse, SnapshotRecord, TriggerResponse,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::Instant;

/// Production API host. Tests point the client at a local mock server instead.
pub const API_BASE_URL: &str = "https://api.brightdata.com";

/// Status value that marks a dataset snapshot as fetchable. Every other
/// status, known or not, means keep waiting.
const STATUS_READY: &str = "ready";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);

pub struct BrightDataClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl BrightDataClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
        }
    }

    /// Override the fixed delay between progress checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Override the total wait budget for a dataset job.
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    /// Run a SERP query through the `/request` endpoint. The search engine
    /// URL gets the percent-encoded query and the `brd_json=1` flag appended
    /// so the response comes back as structured JSON instead of raw HTML.
    pub async fn serp_search(
        &self,
        zone: &str,
        engine_url: &str,
        query: &str,
    ) -> Result<SerpResponse> {
        tracing::info!(engine_url, query, "Running SERP search");

        let search_url = format!("{engine_url}?q={}&brd_json=1", urlencoding::encode(query));
        let body = serde_json::json!({
            "zone": zone,
            "url": search_url,
            "format": "raw",
            "country": "US",
        });

        let url = format!("{}/request?async=true", self.base_url);
        let resp: SerpResponse = self.post_json(&url, &body).await?;

        tracing::info!(query, hits = resp.organic.len(), "SERP search complete");
        Ok(resp)
    }

    /// Submit a dataset job. Returns the snapshot id used to poll and fetch.
    pub async fn trigger_job(
        &self,
        dataset_id: &str,
        target_url: &str,
        prompt: &str,
        output_fields: &[&str],
    ) -> Result<String> {
        let input = vec![JobInput {
            url: target_url.to_string(),
            prompt: prompt.to_string(),
        }];

        let url = format!(
            "{}/datasets/v3/trigger?dataset_id={dataset_id}&format=json&custom_output_fields={}",
            self.base_url,
            output_fields.join("|"),
        );
        let resp: TriggerResponse = self.post_json(&url, &input).await?;

        resp.snapshot_id.ok_or(BrightDataError::MissingSnapshot)
    }

    /// Poll until a snapshot is ready. Checks the progress endpoint on a
    /// fixed interval and gives up with `PollTimeout` once the wait budget
    /// is spent. Statuses other than "ready" are never treated as terminal;
    /// the backend reports transient states we don't enumerate.
    pub async fn wait_for_snapshot(&self, snapshot_id: &str) -> Result<()> {
        let deadline = Instant::now() + self.poll_timeout;

        loop {
            let url = format!("{}/datasets/v3/progress/{snapshot_id}", self.base_url);
            let progress: ProgressResponse = self.get_json(&url).await?;

            if progress.status == STATUS_READY {
                return Ok(());
            }

            tracing::debug!(snapshot_id, status = %progress.status, "Job still in progress");

            if Instant::now() + self.poll_interval > deadline {
                return Err(BrightDataError::PollTimeout(self.poll_timeout));
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Fetch result records from a ready snapshot.
    pub async fn fetch_snapshot(&self, snapshot_id: &str) -> Result<Vec<SnapshotRecord>> {
        let url = format!(
            "{}/datasets/v3/snapshot/{snapshot_id}?format=json",
            self.base_url
        );
        self.get_json(&url).await
    }

    /// Run a dataset job end-to-end: trigger, poll until ready, fetch, and
    /// return the first record. An empty record array is a fault, not an
    /// empty answer.
    pub async fn run_job(
        &self,
        dataset_id: &str,
        target_url: &str,
        prompt: &str,
        output_fields: &[&str],
    ) -> Result<SnapshotRecord> {
        tracing::info!(dataset_id, target_url, "Starting dataset job");

        let snapshot_id = self
            .trigger_job(dataset_id, target_url, prompt, output_fields)
            .await?;
        tracing::info!(snapshot_id, "Job triggered, polling for completion");

        self.wait_for_snapshot(&snapshot_id).await?;

        let records = self.fetch_snapshot(&snapshot_id).await?;
        tracing::info!(snapshot_id, count = records.len(), "Fetched snapshot records");

        records
            .into_iter()
            .next()
            .ok_or(BrightDataError::EmptySnapshot)
    }

    // --- Transport helpers ---

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).bearer_auth(&self.token).send().await?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BrightDataError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
