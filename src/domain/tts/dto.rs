use serde::{Deserialize, Serialize};

use super::catalog::{DEFAULT_OUTPUT_FORMAT, DEFAULT_VOICE};
use super::prosody::NEUTRAL_PERCENT;

/// Request for POST /api/tts
///
/// Extra keys the playground sends (`locale`, `style`, `styledegree`) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "neutral_percent")]
    pub rate: i64,
    #[serde(default = "neutral_percent")]
    pub pitch: i64,
    #[serde(default = "neutral_percent")]
    pub volume: i64,
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: default_voice(),
            rate: NEUTRAL_PERCENT,
            pitch: NEUTRAL_PERCENT,
            volume: NEUTRAL_PERCENT,
            output_format: default_output_format(),
        }
    }
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

fn neutral_percent() -> i64 {
    NEUTRAL_PERCENT
}
