use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brightdata_client::{BrightDataClient, API_BASE_URL};
use smartsearch_research::{EvidenceDigest, ResearchAgent, ToolRegistry};

mod config;
mod routes;

use config::AppConfig;
use routes::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("smartsearch_server=info".parse()?)
                .add_directive("smartsearch_research=info".parse()?)
                .add_directive("brightdata_client=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;

    let mut client = BrightDataClient::new(API_BASE_URL, &config.api_key);
    if let Some(secs) = config.poll_timeout_secs {
        client = client.with_poll_timeout(Duration::from_secs(secs));
    }

    let registry = Arc::new(ToolRegistry::builtin(
        Arc::new(client),
        &config.serp_zone,
        &config.research_dataset_id,
    ));
    let agent: Arc<dyn ResearchAgent> = Arc::new(EvidenceDigest::new(registry));

    let app = build_router(Arc::new(AppState { agent }))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Logging layer: method + path only (no query bodies)
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.host, config.port);
    info!("Smart Search API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
