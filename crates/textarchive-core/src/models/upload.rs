use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source tag recorded when text is typed in by the user.
pub const DEFAULT_TEXT_SOURCE: &str = "manual";

/// Metadata of a file stored by the backend; later referenced by `file_id` only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub file_id: String,
    pub filename: String,
    pub file_path: String,
    pub file_size: u64,
    pub content_type: String,
    #[serde(with = "crate::timestamp")]
    pub uploaded_at: DateTime<Utc>,
}

/// Request body for `POST /upload/text`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextInputRequest {
    pub text: String,
    pub source: String,
}

/// Response of `POST /upload/text`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextInputResponse {
    pub text_id: String,
    pub text: String,
    pub source: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}
