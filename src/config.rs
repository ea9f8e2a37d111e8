use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,

    // Output
    pub output_dir: PathBuf,

    // Pacing between languages
    pub request_delay: Duration,

    // Corpus
    pub corpus_file: Option<PathBuf>,
    pub source_language_code: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A missing key is left for the service to reject
        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.is_empty() {
            warn!("GEMINI_API_KEY not set, requests will be rejected by the service");
        }

        let request_delay_ms = match std::env::var("REQUEST_DELAY_MS") {
            Ok(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("REQUEST_DELAY_MS is not a number: '{}'", v))?,
            Err(_) => 400,
        };

        // Every code starts with "", so an empty value would skip the whole catalog
        let source_language_code = std::env::var("SOURCE_LANGUAGE_CODE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| "en".to_string());
        if source_language_code.is_empty() {
            bail!("SOURCE_LANGUAGE_CODE must not be empty");
        }

        Ok(Self {
            gemini_api_key,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),

            output_dir: std::env::var("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),

            request_delay: Duration::from_millis(request_delay_ms),

            corpus_file: std::env::var("CORPUS_FILE").ok().map(PathBuf::from),
            source_language_code,
        })
    }
}
