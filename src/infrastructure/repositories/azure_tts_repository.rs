use super::tts_repository::{TtsRepository, TtsRepositoryError};
use crate::domain::tts::ssml::SSML_CONTENT_TYPE;
use async_trait::async_trait;

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const USER_AGENT: &str = "tts-playground";

/// Azure Cognitive Services implementation of TTS repository
pub struct AzureTtsRepository {
    api_key: Option<String>,
    endpoint: String,
    http_client: reqwest::Client,
}

impl AzureTtsRepository {
    pub fn new(api_key: Option<String>, region: &str, endpoint_override: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint_override.unwrap_or_else(|| regional_endpoint(region)),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// REST endpoint for a speech region
pub fn regional_endpoint(region: &str) -> String {
    format!("https://{}.tts.speech.microsoft.com/cognitiveservices/v1", region)
}

#[async_trait]
impl TtsRepository for AzureTtsRepository {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn synthesize(
        &self,
        ssml: &str,
        output_format: &str,
    ) -> Result<Vec<u8>, TtsRepositoryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TtsRepositoryError::MissingCredential)?;

        let start_time = std::time::Instant::now();

        tracing::debug!(
            endpoint = %self.endpoint,
            output_format = output_format,
            ssml_length = ssml.len(),
            "Calling Azure TTS"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, api_key)
            .header(reqwest::header::CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, output_format)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .body(ssml.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Azure TTS request failed");
                TtsRepositoryError::Transport(format!("Azure TTS request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = status.as_u16(),
                error = %error_text,
                "Azure TTS returned an error"
            );
            return Err(TtsRepositoryError::Upstream {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to read Azure TTS audio body");
                TtsRepositoryError::Transport(format!("Failed to read audio body: {}", e))
            })?
            .to_vec();

        let duration = start_time.elapsed();
        tracing::info!(
            provider = "azure",
            latency_ms = duration.as_millis(),
            audio_size_bytes = audio_bytes.len(),
            output_format = output_format,
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }
}
