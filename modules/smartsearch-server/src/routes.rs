use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use smartsearch_research::ResearchAgent;

pub struct AppState {
    pub agent: Arc<dyn ResearchAgent>,
}

#[derive(Deserialize)]
pub struct ResearchRequest {
    query: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/api/research", post(api_research))
        .with_state(state)
}

pub async fn api_research(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ResearchRequest>,
) -> impl IntoResponse {
    let query = body.query.trim();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Please enter a valid query."})),
        )
            .into_response();
    }

    info!(query_chars = query.len(), "Research request received");

    match state.agent.answer(query).await {
        Ok(answer) => Json(json!({"answer": answer})).into_response(),
        Err(e) => {
            warn!(error = %e, "Research agent failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal Server Error. Check logs."})),
            )
                .into_response()
        }
    }
}
