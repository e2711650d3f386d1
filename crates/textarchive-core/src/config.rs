//! Configuration module
//!
//! Client settings are read from the environment (after `dotenvy` has loaded
//! any `.env` file): backend base URL, request timeout, and where the session
//! is persisted between runs.

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const STATE_DIR_NAME: &str = "textarchive";
const STATE_FILE_NAME: &str = "session.json";

/// Settings needed to talk to the backend and to persist the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub state_file: PathBuf,
}

impl ClientConfig {
    /// Create config from environment: TEXTARCHIVE_API_URL (or API_URL),
    /// TEXTARCHIVE_TIMEOUT_SECS, TEXTARCHIVE_STATE_FILE.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("TEXTARCHIVE_API_URL")
            .or_else(|| lookup("API_URL"))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match lookup("TEXTARCHIVE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "TEXTARCHIVE_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let state_file = match lookup("TEXTARCHIVE_STATE_FILE") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_state_file()?,
        };

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout_secs,
            state_file,
        })
    }
}

fn default_state_file() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoStateDir)?;
    Ok(dir.join(STATE_DIR_NAME).join(STATE_FILE_NAME))
}
