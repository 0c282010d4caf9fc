use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(config: Arc<Config>, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/api/tts", post(TtsController::synthesize))
        .route("/api/catalog", get(TtsController::get_catalog))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
