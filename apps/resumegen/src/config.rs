use std::path::PathBuf;

use anyhow::{bail, Result};

pub const DEFAULT_DATA_FOLDER: &str = "data_folder";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// Diagnostics are discarded unless the user asks for them.
pub const DEFAULT_LOG_FILTER: &str = "off";

/// Process configuration loaded from environment variables.
/// The API key is not part of it: it only ever comes from `secrets.yaml`.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_folder: PathBuf,
    pub groq_api_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_folder = optional(&lookup, "RESUMEGEN_DATA_FOLDER")
            .unwrap_or_else(|| DEFAULT_DATA_FOLDER.to_string());
        let groq_api_url = optional(&lookup, "GROQ_API_URL")
            .unwrap_or_else(|| DEFAULT_GROQ_API_URL.to_string());

        if !groq_api_url.starts_with("http://") && !groq_api_url.starts_with("https://") {
            bail!("GROQ_API_URL must be an http(s) URL, got '{groq_api_url}'");
        }

        Ok(Config {
            data_folder: PathBuf::from(data_folder),
            groq_api_url,
            rust_log: optional(&lookup, "RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

/// Blank values count as unset.
fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
