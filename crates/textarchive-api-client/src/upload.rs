use std::path::{Component, Path};

use reqwest::multipart::{Form, Part};
use textarchive_core::models::{TextInputRequest, TextInputResponse, UploadedFile, DEFAULT_TEXT_SOURCE};

use crate::{path_segment, ApiClient, ApiError, Result};

pub const DEFAULT_SKIP: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 20;

const FALLBACK_FILENAME: &str = "upload.bin";

impl ApiClient {
    /// Upload a local file as multipart field `file`.
    pub async fn upload_file(&self, file_path: impl AsRef<Path>) -> Result<UploadedFile> {
        let path = file_path.as_ref();
        if path.components().any(|c| c == Component::ParentDir) {
            return Err(ApiError::InvalidInput(format!(
                "path must not contain '..': {}",
                path.display()
            )));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(FALLBACK_FILENAME);

        self.upload_bytes(filename, bytes).await
    }

    /// Upload in-memory content as multipart field `file`.
    /// The content type is guessed from `filename`.
    pub async fn upload_bytes(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadedFile> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        tracing::debug!(filename, size = bytes.len(), %mime, "Uploading file");

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime.essence_str())
            .map_err(|e| ApiError::InvalidInput(format!("content type {}: {}", mime, e)))?;
        let form = Form::new().part("file", part);

        self.post_multipart("/upload/file", form).await
    }

    /// Record raw text for later classification. `source` defaults to `"manual"`.
    pub async fn input_text(&self, text: &str, source: Option<&str>) -> Result<TextInputResponse> {
        let body = TextInputRequest {
            text: text.to_string(),
            source: source.unwrap_or(DEFAULT_TEXT_SOURCE).to_string(),
        };
        self.post_json("/upload/text", &body).await
    }

    /// Page through the caller's uploads, newest first.
    pub async fn get_uploaded_files(&self, skip: u32, limit: u32) -> Result<Vec<UploadedFile>> {
        let query = [("skip", skip.to_string()), ("limit", limit.to_string())];
        self.get("/upload/files", &query).await
    }

    pub async fn delete_uploaded_file(&self, file_id: &str) -> Result<()> {
        self.delete(&format!("/upload/file/{}", path_segment(file_id)))
            .await
    }
}
