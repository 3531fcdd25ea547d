//! Standalone text-generation endpoint backed by the rule-based generator. Speaks the same
//! contract the API server expects from a remote service.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    foundation::error::BlueboardError,
    generate::{
        classify::{Classification, PromptRequest},
        rules::RuleBasedGenerator,
    },
    server::{
        error::{ApiError, ApiResult},
        routes::cors,
    },
};

pub fn router() -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Health {
    pub status: String,
    pub mode: String,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
        mode: "rule-based".to_string(),
    })
}

async fn generate(
    body: Result<Json<PromptRequest>, JsonRejection>,
) -> ApiResult<Json<Classification>> {
    let Json(req) = body.map_err(ApiError::from_rejection)?;
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(BlueboardError::validation("prompt must be non-empty").into());
    }
    let classification = RuleBasedGenerator.classify(prompt);
    tracing::info!(subject = %classification.subject, "prompt classified");
    Ok(Json(classification))
}

#[cfg(test)]
#[path = "../../tests/unit/server/ai_service.rs"]
mod tests;
