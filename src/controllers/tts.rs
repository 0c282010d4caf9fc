use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{catalog, Catalog, SynthesisRequest, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text to speech through the provider
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        payload: Result<Json<SynthesisRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // An unreadable body is treated like any other unexpected failure
        let Json(request) =
            payload.map_err(|e| AppError::Internal(format!("Invalid request body: {}", e)))?;

        let audio = controller.tts_service.synthesize(request).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_CONTENT_TYPE));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(audio.len()));

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }

    /// GET /api/catalog - Voices, output formats and slider ranges
    pub async fn get_catalog() -> Json<Catalog> {
        Json(catalog())
    }
}
