use serde::{Deserialize, Serialize};

/// Accepted range for rate and pitch percentages (100 = neutral)
pub const RATE_PITCH_RANGE: (i64, i64) = (50, 200);

/// Accepted range for the volume percentage
pub const VOLUME_RANGE: (i64, i64) = (0, 100);

pub const NEUTRAL_PERCENT: i64 = 100;

/// Named SSML volume levels, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolumeLevel {
    Silent,
    XSoft,
    Soft,
    Medium,
    Loud,
    XLoud,
}

impl VolumeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeLevel::Silent => "silent",
            VolumeLevel::XSoft => "x-soft",
            VolumeLevel::Soft => "soft",
            VolumeLevel::Medium => "medium",
            VolumeLevel::Loud => "loud",
            VolumeLevel::XLoud => "x-loud",
        }
    }
}

impl std::fmt::Display for VolumeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Prosody attribute values ready to be placed in a `<prosody>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prosody {
    pub rate: String,
    pub pitch: String,
    pub volume: VolumeLevel,
}

impl Prosody {
    /// Map UI slider percentages to prosody attributes.
    ///
    /// Out-of-range values saturate at the nearest bound instead of failing.
    pub fn from_percentages(rate: i64, pitch: i64, volume: i64) -> Self {
        Self {
            rate: map_rate(rate),
            pitch: map_pitch(pitch),
            volume: map_volume(volume),
        }
    }
}

impl Default for Prosody {
    fn default() -> Self {
        Self::from_percentages(NEUTRAL_PERCENT, NEUTRAL_PERCENT, NEUTRAL_PERCENT)
    }
}

/// Rate percentage as a two-decimal multiplier (100 -> "1.00")
pub fn map_rate(rate: i64) -> String {
    let rate = rate.clamp(RATE_PITCH_RANGE.0, RATE_PITCH_RANGE.1);
    // Integer formatting keeps the two decimals exact
    format!("{}.{:02}", rate / 100, rate % 100)
}

/// Pitch percentage as a signed relative change (150 -> "+50%", 80 -> "-20%")
pub fn map_pitch(pitch: i64) -> String {
    let pitch = pitch.clamp(RATE_PITCH_RANGE.0, RATE_PITCH_RANGE.1);
    format!("{:+}%", pitch - NEUTRAL_PERCENT)
}

/// Volume percentage bucketed into a named level; upper bounds are inclusive
pub fn map_volume(volume: i64) -> VolumeLevel {
    match volume.clamp(VOLUME_RANGE.0, VOLUME_RANGE.1) {
        0 => VolumeLevel::Silent,
        1..=25 => VolumeLevel::XSoft,
        26..=50 => VolumeLevel::Soft,
        51..=75 => VolumeLevel::Medium,
        76..=90 => VolumeLevel::Loud,
        _ => VolumeLevel::XLoud,
    }
}
