use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::agents::Agent;
use crate::answer::{normalize, resolve};
use crate::error::ApiError;

pub struct AppState {
    pub agent: Arc<dyn Agent>,
}

impl AppState {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/query", post(query_agent))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>, addr: &str) -> std::io::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn query_agent(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;

    let span = info_span!("query", request_id = %Uuid::new_v4());

    async move {
        info!("Received query: {}", request.question);

        match answer_question(state.agent.as_ref(), &request.question).await {
            Ok(body) => Ok(Json(body)),
            Err(e) => {
                error!(status = e.status.as_u16(), "Error processing query: {}", e.detail);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

/// Ask the agent, then run its text through both answer stages.
pub async fn answer_question(agent: &dyn Agent, question: &str) -> Result<Value, ApiError> {
    let reply = agent.run(question).await?;
    info!("Agent response generated by {}", agent.name());

    let normalized = normalize(&reply.into_content());
    resolve(normalized).into_result()
}
