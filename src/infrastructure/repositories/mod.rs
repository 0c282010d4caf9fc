pub mod azure_tts_repository;
pub mod tts_repository;

pub use azure_tts_repository::AzureTtsRepository;
pub use tts_repository::{TtsRepository, TtsRepositoryError};
