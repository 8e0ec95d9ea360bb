//! Integration tests for the retrieval pipeline against a mocked backend.
//!
//! The registry is wired with real adapters pointed at a wiremock server, so
//! these tests cover the full path from capability dispatch to Evidence Block
//! text, including the never-fail degradation contract.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brightdata_client::BrightDataClient;
use smartsearch_research::{
    EvidenceSource, ToolRegistry, DEEP_RESEARCH, DISCUSSION_SEARCH, NO_RESULTS, WEB_SEARCH,
};

fn registry_for(server: &MockServer) -> ToolRegistry {
    let client = BrightDataClient::new(&server.uri(), "test-token")
        .with_poll_interval(Duration::from_millis(10))
        .with_poll_timeout(Duration::from_millis(100));
    ToolRegistry::builtin(Arc::new(client), "serp_zone", "gd_dataset")
}

async fn mount_serp(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_research_job(server: &MockServer, record: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/datasets/v3/trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"snapshot_id": "snap-1"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/datasets/v3/progress/snap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ready"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/datasets/v3/snapshot/snap-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([record])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn web_search_formats_hits_as_evidence_blocks() {
    let server = MockServer::start().await;
    mount_serp(
        &server,
        json!({
            "organic": [
                {"title": "First", "link": "https://a.example", "description": "Alpha."},
                {"title": "Second", "link": "https://b.example", "description": "Beta."}
            ]
        }),
    )
    .await;

    let registry = registry_for(&server);
    let source = registry.get(WEB_SEARCH).unwrap();
    let evidence = source.retrieve("anything").await;

    assert_eq!(
        evidence,
        "Title: First\nLink: https://a.example\nSnippet: Alpha.\n\n\
         Title: Second\nLink: https://b.example\nSnippet: Beta."
    );
}

#[tokio::test]
async fn zero_hits_yield_the_no_results_sentinel() {
    let server = MockServer::start().await;
    mount_serp(&server, json!({"organic": []})).await;

    let registry = registry_for(&server);
    let evidence = registry.get(WEB_SEARCH).unwrap().retrieve("obscure").await;

    assert_eq!(evidence, NO_RESULTS);
}

#[tokio::test]
async fn search_backend_failure_degrades_to_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/request"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream broke"))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let evidence = registry.get(DISCUSSION_SEARCH).unwrap().retrieve("q").await;

    assert!(evidence.starts_with("Error connecting to search API:"));
}

#[tokio::test]
async fn deep_research_appends_sources_suffix() {
    let server = MockServer::start().await;
    mount_research_job(
        &server,
        json!({
            "answer_text_markdown": "Because of Rayleigh scattering.",
            "sources": ["https://example.com/sky", "https://example.com/optics"]
        }),
    )
    .await;

    let registry = registry_for(&server);
    let evidence = registry
        .get(DEEP_RESEARCH)
        .unwrap()
        .retrieve("why is the sky blue")
        .await;

    assert!(evidence.starts_with("Because of Rayleigh scattering."));
    assert!(evidence.contains("**Sources:**"));
    assert!(evidence.contains("https://example.com/optics"));
}

#[tokio::test]
async fn job_failure_degrades_to_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/datasets/v3/trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let evidence = registry.get(DEEP_RESEARCH).unwrap().retrieve("q").await;

    assert_eq!(evidence, "Dataset Job Failed: Failed to start the job.");
}

#[tokio::test]
async fn gather_never_errors_even_when_every_backend_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(".*"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let registry = registry_for(&server);
    let evidence = registry.gather("anything").await;

    assert_eq!(evidence.len(), 3);
    for block in &evidence {
        assert!(!block.text.is_empty());
    }
}
