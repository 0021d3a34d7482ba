use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use super::trivia_error::{Result, TriviaError};

pub const PRODUCTION: &str = "PROD";
pub const CONFIG_FILE_NAME: &str = "./config/config.json";
pub const USE_CONFIG_FILE: &str = "USECONFIGFILE";

pub const DEFAULT_TRIVIA_URL: &str = "https://trivia-by-api-ninjas.p.rapidapi.com/v1/trivia";

// Environment variable keys
const ENV: &str = "ENV";
const HOST: &str = "HOST";
const PORT: &str = "PORT";
const DS_NAME: &str = "DS_NAME";
const DS_PORT: &str = "DS_PORT";
const DS_STATUS_ATTEMPTS: &str = "DS_STATUS_ATTEMPTS";
const DS_STATUS_DELAY_MS: &str = "DS_STATUS_DELAY_MS";
const TRIVIA_URL: &str = "TRIVIA_URL";
const TRIVIA_API_KEY: &str = "TRIVIA_API_KEY";

/// Canned messages returned to players after an answer is checked.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponseMessages {
    pub congrats: String,
    #[serde(rename = "tryagain")]
    pub try_again: String,
}

impl Default for ResponseMessages {
    fn default() -> Self {
        ResponseMessages {
            congrats: "Congratulations! That is correct".to_string(),
            try_again: "Nice Try! Better luck on the next answer".to_string(),
        }
    }
}

/// Process-wide settings, read once at startup and shared behind an `Arc`.
///
/// Field names on the JSON side follow the `config/config.json` layout
/// (`env`, `hostname`, `hostport`, `dsname`, `dsport`, `Messages`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub env: String,
    #[serde(rename = "hostname")]
    pub host: String,
    #[serde(rename = "hostport")]
    pub port: String,
    #[serde(rename = "dsname")]
    pub datastore_name: String,
    #[serde(rename = "dsport")]
    pub datastore_port: String,
    #[serde(rename = "Messages")]
    pub messages: ResponseMessages,
    pub status_attempts: u32,
    pub status_delay_ms: u64,
    pub trivia_url: String,
    pub trivia_api_key: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        TriviaConfig {
            env: String::new(),
            host: String::new(),
            port: String::new(),
            datastore_name: String::new(),
            datastore_port: String::new(),
            messages: ResponseMessages::default(),
            status_attempts: 3,
            status_delay_ms: 6_000,
            trivia_url: DEFAULT_TRIVIA_URL.to_string(),
            trivia_api_key: String::new(),
        }
    }
}

impl TriviaConfig {
    /// Loads from `./config/config.json` when `USECONFIGFILE` is set, otherwise
    /// from environment variables.
    pub fn load() -> Result<Self> {
        match env::var(USE_CONFIG_FILE) {
            Ok(flag) if !flag.is_empty() => {
                info!("Using config file to load config");
                Self::from_file(CONFIG_FILE_NAME)
            }
            _ => {
                info!("Using config environment to load config");
                Ok(Self::from_env())
            }
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(TriviaError::ConfigRead)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(TriviaError::ConfigParse)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).unwrap_or_default();

        TriviaConfig {
            env: read(ENV),
            host: read(HOST),
            port: read(PORT),
            datastore_name: read(DS_NAME),
            datastore_port: read(DS_PORT),
            messages: ResponseMessages::default(),
            status_attempts: lookup(DS_STATUS_ATTEMPTS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_attempts),
            status_delay_ms: lookup(DS_STATUS_DELAY_MS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.status_delay_ms),
            trivia_url: lookup(TRIVIA_URL)
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.trivia_url),
            trivia_api_key: read(TRIVIA_API_KEY),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == PRODUCTION
    }

    pub fn status_delay(&self) -> Duration {
        Duration::from_millis(self.status_delay_ms)
    }
}
