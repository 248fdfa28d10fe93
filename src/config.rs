//! Runtime configuration
//!
//! Values come from the process environment. `main` loads `.env` before
//! anything else; `application.properties` in the working directory is read
//! here. Variables already set in the environment always win.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6/";
pub const DEFAULT_HISTORY_FILE: &str = "conversionHistory.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const PROPERTIES_FILE: &str = "application.properties";

/// Configuration errors. All of them stop the program at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY is not set (add it to .env or application.properties)")]
    MissingApiKey,
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub history_path: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    /// Load `application.properties`, then read the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(PROPERTIES_FILE))
    }

    /// Load a properties file into the environment, then read it.
    /// A missing file is skipped.
    pub fn load_from(properties: &Path) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::from_filename(properties) {
            debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let history_path = lookup("HISTORY_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "REQUEST_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key,
            base_url,
            history_path,
            request_timeout,
        })
    }
}
