use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness only reflects configuration; the provider is never called here
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    if config.has_tts_credential() {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "tts": "configured",
                "region": config.azure_tts_region,
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "tts": "missing_credential",
            })),
        )
    }
}
