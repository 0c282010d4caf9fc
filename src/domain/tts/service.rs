use super::catalog::find_voice;
use super::dto::SynthesisRequest;
use super::error::TtsServiceError;
use super::prosody::Prosody;
use super::ssml::SsmlDocument;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    language: String,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, language: String) -> Self {
        Self { tts_repo, language }
    }

    pub fn is_configured(&self) -> bool {
        self.tts_repo.is_configured()
    }

    /// Build the SSML document for a request
    pub fn build_ssml(&self, request: &SynthesisRequest) -> String {
        let prosody = Prosody::from_percentages(request.rate, request.pitch, request.volume);
        SsmlDocument::new(&self.language, &request.voice, &prosody, &request.text).render()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize speech for a playground request
    ///
    /// This operation:
    /// - Rejects blank text
    /// - Fails fast when no provider credential is configured
    /// - Maps prosody percentages and renders the SSML document
    /// - Makes exactly one provider call
    ///
    /// Returns the provider's audio bytes unchanged
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<Vec<u8>, TtsServiceError> {
        if request.text.trim().is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        if !self.tts_repo.is_configured() {
            return Err(TtsServiceError::Configuration(
                "TTS API key is not configured".to_string(),
            ));
        }

        if find_voice(&request.voice).is_none() {
            tracing::debug!(voice = %request.voice, "Voice is not in the catalog, forwarding as-is");
        }

        let ssml = self.build_ssml(&request);

        tracing::info!(
            voice = %request.voice,
            output_format = %request.output_format,
            rate = request.rate,
            pitch = request.pitch,
            volume = request.volume,
            text_length = request.text.chars().count(),
            "Synthesizing speech"
        );

        let audio = self
            .tts_repo
            .synthesize(&ssml, &request.output_format)
            .await?;

        Ok(audio)
    }
}
