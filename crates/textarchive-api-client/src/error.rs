use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use textarchive_core::StorageError;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything an API call can fail with. Failures are passed through as-is:
/// nothing is retried and status codes are not interpreted here.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response as JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// HTTP status for errors that came back from the server.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) | ApiError::Decode(e) => e.status(),
            _ => None,
        }
    }
}
