use serde::Deserialize;
use std::env;

pub const DEFAULT_REGION: &str = "eastus";
pub const DEFAULT_LANGUAGE: &str = "es-AR";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Azure TTS
    pub azure_tts_api_key: Option<String>,
    pub azure_tts_region: String,
    pub azure_tts_endpoint: Option<String>,
    pub tts_language: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            // A blank key counts as unset
            azure_tts_api_key: non_blank_var("AZURE_TTS_API_KEY"),
            azure_tts_region: non_blank_var("AZURE_TTS_REGION")
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            azure_tts_endpoint: non_blank_var("AZURE_TTS_ENDPOINT"),
            tts_language: non_blank_var("TTS_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn has_tts_credential(&self) -> bool {
        self.azure_tts_api_key.is_some()
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
