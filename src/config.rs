use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Scan backend
    pub scan_api_url: String,
    pub scan_timeout_secs: u64,

    // Structured extraction (completion-style endpoint)
    pub extraction_api_url: String,
    pub extraction_api_key: String,
    pub extraction_model: String,

    // Stored language preference
    pub preference_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Scan backend
            scan_api_url: std::env::var("SCAN_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000/api/scan".to_string()),
            scan_timeout_secs: std::env::var("SCAN_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Structured extraction
            extraction_api_url: std::env::var("EXTRACTION_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".to_string()),
            extraction_api_key: std::env::var("EXTRACTION_API_KEY")
                .context("EXTRACTION_API_KEY not set")?,
            extraction_model: std::env::var("EXTRACTION_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),

            // Preference
            preference_path: std::env::var("PREFERENCE_PATH")
                .unwrap_or_else(|_| "data/preference.json".to_string()),
        })
    }
}
