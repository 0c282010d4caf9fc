use crate::error::AppError;
use crate::infrastructure::repositories::TtsRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TtsRepositoryError> for TtsServiceError {
    fn from(err: TtsRepositoryError) -> Self {
        match err {
            TtsRepositoryError::MissingCredential => {
                TtsServiceError::Configuration("TTS API key is not configured".to_string())
            }
            TtsRepositoryError::Upstream { status, message } => {
                TtsServiceError::Upstream { status, message }
            }
            TtsRepositoryError::Transport(msg) => TtsServiceError::Other(anyhow::anyhow!(msg)),
        }
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Configuration(msg) => AppError::Configuration(msg),
            TtsServiceError::Upstream { status, message } => AppError::Upstream { status, message },
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
