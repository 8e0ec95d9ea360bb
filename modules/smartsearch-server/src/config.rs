use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Contains only secrets and env-specific values; capability bindings
/// (zones, dataset ids) are passed explicitly into the registry so the
/// retrieval core never touches the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub serp_zone: String,
    pub research_dataset_id: String,

    pub host: String,
    pub port: u16,

    /// Overrides the client's dataset-job wait budget, in seconds.
    pub poll_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_key: std::env::var("BRIGHTDATA_API_KEY")?,
            serp_zone: std::env::var("BRIGHTDATA_SERP_ZONE")?,
            research_dataset_id: std::env::var("BRIGHTDATA_RESEARCH_DATASET_ID")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),
            poll_timeout_secs: std::env::var("BRIGHTDATA_POLL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok()),
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        fn preview(val: &str) -> String {
            let n = val.len().min(5);
            format!("{}...({} chars)", &val[..n], val.len())
        }

        tracing::info!("Config loaded:");
        tracing::info!("  BRIGHTDATA_API_KEY: {}", preview(&self.api_key));
        tracing::info!("  BRIGHTDATA_SERP_ZONE: {}", self.serp_zone);
        tracing::info!(
            "  BRIGHTDATA_RESEARCH_DATASET_ID: {}",
            self.research_dataset_id
        );
    }
}
