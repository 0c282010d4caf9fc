use serde::Serialize;

use super::prosody::{NEUTRAL_PERCENT, RATE_PITCH_RANGE, VOLUME_RANGE};

pub const DEFAULT_VOICE: &str = "es-AR-ElenaNeural";
pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-16khz-32kbitrate-mono-mp3";

#[derive(Debug, Clone, Serialize)]
pub struct VoiceOption {
    pub id: &'static str,
    pub label: &'static str,
    pub locale: &'static str,
    pub styles: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputFormatOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PercentRange {
    pub min: i64,
    pub max: i64,
    pub default: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProsodyRanges {
    pub rate: PercentRange,
    pub pitch: PercentRange,
    pub volume: PercentRange,
}

/// Response for GET /api/catalog
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub voices: &'static [VoiceOption],
    pub output_formats: &'static [OutputFormatOption],
    pub default_voice: &'static str,
    pub default_output_format: &'static str,
    pub prosody: ProsodyRanges,
}

pub const VOICES: &[VoiceOption] = &[
    VoiceOption { id: "es-AR-ElenaNeural", label: "Elena - Argentina (Female)", locale: "es-AR", styles: &[] },
    VoiceOption { id: "es-AR-TomasNeural", label: "Tomás - Argentina (Male)", locale: "es-AR", styles: &[] },
    VoiceOption { id: "es-MX-JorgeNeural", label: "Jorge - México (Male)", locale: "es-MX", styles: &["chat", "cheerful"] },
    VoiceOption { id: "es-MX-DaliaNeural", label: "Dalia - México (Female)", locale: "es-MX", styles: &[] },
    VoiceOption { id: "es-MX-BeatrizNeural", label: "Beatriz - México (Female)", locale: "es-MX", styles: &[] },
    VoiceOption { id: "es-MX-CandelaNeural", label: "Candela - México (Female)", locale: "es-MX", styles: &[] },
    VoiceOption { id: "es-MX-CarlotaNeural", label: "Carlota - México (Female)", locale: "es-MX", styles: &[] },
    VoiceOption { id: "es-MX-CecilioNeural", label: "Cecilio - México (Male)", locale: "es-MX", styles: &[] },
    VoiceOption { id: "es-MX-GerardoNeural", label: "Gerardo - México (Male)", locale: "es-MX", styles: &[] },
];

pub const OUTPUT_FORMATS: &[OutputFormatOption] = &[
    OutputFormatOption { id: "audio-16khz-32kbitrate-mono-mp3", label: "MP3 16kHz 32kbps" },
    OutputFormatOption { id: "audio-24khz-48kbitrate-mono-mp3", label: "MP3 24kHz 48kbps" },
    OutputFormatOption { id: "audio-48khz-96kbitrate-mono-mp3", label: "MP3 48kHz 96kbps" },
    OutputFormatOption { id: "audio-16khz-128kbitrate-mono-mp3", label: "MP3 16kHz 128kbps" },
];

/// Voices, output formats and slider ranges offered by the playground
pub fn catalog() -> Catalog {
    let rate_pitch = PercentRange {
        min: RATE_PITCH_RANGE.0,
        max: RATE_PITCH_RANGE.1,
        default: NEUTRAL_PERCENT,
    };

    Catalog {
        voices: VOICES,
        output_formats: OUTPUT_FORMATS,
        default_voice: DEFAULT_VOICE,
        default_output_format: DEFAULT_OUTPUT_FORMAT,
        prosody: ProsodyRanges {
            rate: rate_pitch.clone(),
            pitch: rate_pitch,
            volume: PercentRange {
                min: VOLUME_RANGE.0,
                max: VOLUME_RANGE.1,
                default: NEUTRAL_PERCENT,
            },
        },
    }
}

pub fn find_voice(id: &str) -> Option<&'static VoiceOption> {
    VOICES.iter().find(|v| v.id == id)
}
