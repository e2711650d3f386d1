//! Error types module
//!
//! Errors raised by the pieces of the client that never touch the network:
//! session persistence and configuration loading. Transport errors live in
//! the API client crate.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read session file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Session file '{path}' is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Could not determine a config directory; set TEXTARCHIVE_STATE_FILE")]
    NoStateDir,
}
