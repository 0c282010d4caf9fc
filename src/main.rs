use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_playground::controllers::tts::TtsController;
use tts_playground::domain::tts::TtsService;
use tts_playground::infrastructure::config::{Config, LogFormat};
use tts_playground::infrastructure::http::start_http_server;
use tts_playground::infrastructure::repositories::AzureTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS Playground on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        region = %config.azure_tts_region,
        language = %config.tts_language,
        has_api_key = config.has_tts_credential(),
        endpoint_override = config.azure_tts_endpoint.is_some(),
        "Azure TTS configuration loaded"
    );

    if !config.has_tts_credential() {
        tracing::warn!("AZURE_TTS_API_KEY is not set. Synthesis requests will fail until it is configured");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(AzureTtsRepository::new(
        config.azure_tts_api_key.clone(),
        &config.azure_tts_region,
        config.azure_tts_endpoint.clone(),
    ));
    let tts_service = Arc::new(TtsService::new(tts_repo, config.tts_language.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tts_playground=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
