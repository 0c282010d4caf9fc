use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum TtsRepositoryError {
    #[error("provider credential is not configured")]
    MissingCredential,
    #[error("provider returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("provider request failed: {0}")]
    Transport(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the remote provider that turns an SSML document into audio.
///
/// Implementations must make at most one provider call per `synthesize`
/// and must not call out at all when `is_configured` is false.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Whether a provider credential is available
    fn is_configured(&self) -> bool;

    /// Synthesize an SSML document
    ///
    /// # Arguments
    /// * `ssml` - The complete SSML document
    /// * `output_format` - Provider identifier of the audio encoding
    ///
    /// # Errors
    /// `MissingCredential` without a credential, `Upstream` for a non-success
    /// provider status, `Transport` for anything else
    async fn synthesize(&self, ssml: &str, output_format: &str)
        -> Result<Vec<u8>, TtsRepositoryError>;
}
