pub mod catalog;
pub mod dto;
pub mod error;
pub mod prosody;
pub mod service;
pub mod ssml;

pub use catalog::{catalog, Catalog};
pub use dto::SynthesisRequest;
pub use error::TtsServiceError;
pub use prosody::{Prosody, VolumeLevel};
pub use service::{TtsService, TtsServiceApi};
pub use ssml::SsmlDocument;
