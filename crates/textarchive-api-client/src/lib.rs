//! HTTP client for the Text Archive API.
//!
//! Provides a thin client with bearer auth taken from an [`AuthStore`], generic
//! GET/POST/PUT/DELETE helpers, and one module of domain methods per backend
//! resource (auth, classification, memos, schedules, OCR, upload). Every method
//! sends exactly one request and returns the decoded body unmodified.

pub mod auth;
pub mod classification;
pub mod error;
pub mod memo;
pub mod ocr;
pub mod schedule;
pub mod session;
pub mod upload;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use textarchive_core::ClientConfig;

pub use error::{ApiError, Result};
pub use session::{AuthStore, SessionState};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Authentication strategy for the API.
#[derive(Clone)]
pub enum Auth {
    /// No `Authorization` header.
    None,
    /// `Authorization: Bearer {token}` read from the session at request time,
    /// omitted while logged out.
    Session(Arc<AuthStore>),
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::None => f.write_str("None"),
            Auth::Session(store) => f
                .debug_tuple("Session")
                .field(&store.is_authenticated())
                .finish(),
        }
    }
}

/// HTTP client for the Text Archive API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, auth: Auth) -> Result<Self> {
        Self::with_timeout(base_url, auth, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, auth: Auth, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Client for `config`, authenticating with whatever `session` holds.
    pub fn from_config(config: &ClientConfig, session: Arc<AuthStore>) -> Result<Self> {
        Self::with_timeout(
            config.base_url.clone(),
            Auth::Session(session),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The session this client reads its token from, if any.
    pub fn session(&self) -> Option<&Arc<AuthStore>> {
        match &self.auth {
            Auth::Session(store) => Some(store),
            Auth::None => None,
        }
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        let token = match &self.auth {
            Auth::None => None,
            Auth::Session(store) => store.token(),
        };
        match token {
            Some(token) if !token.is_empty() => {
                request.header("Authorization", format!("Bearer {}", token))
            }
            _ => request,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.build_url(path));
        self.apply_auth(request)
    }

    /// Send and turn non-2xx statuses into [`ApiError::Status`].
    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!(%method, path, "Sending API request");

        let response = request.send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%method, path, %status, "API request failed");
            return Err(ApiError::Status { status, body });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        response.json().await.map_err(ApiError::Decode)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let mut request = self.request(Method::GET, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.execute(Method::GET, path, request).await?;
        Self::decode(response).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.request(Method::POST, path).json(body);
        let response = self.execute(Method::POST, path, request).await?;
        Self::decode(response).await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.request(Method::PUT, path).json(body);
        let response = self.execute(Method::PUT, path, request).await?;
        Self::decode(response).await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let request = self.request(Method::POST, path).multipart(form);
        let response = self.execute(Method::POST, path, request).await?;
        Self::decode(response).await
    }

    /// DELETE request. Any response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, request).await?;
        Ok(())
    }
}

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a caller-supplied id for use as one path segment.
pub(crate) fn path_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

// Re-export domain types for convenience.
pub use textarchive_core::models::{
    AuthResponse, ClassificationKind, ClassificationResult, CurrentUser, ExtractedData,
    ManualClassifyResponse, Memo, MemoCreateRequest, MemoListResponse, MemoUpdateRequest,
    OcrEditResponse, OcrResult, OcrTextDetail, Schedule, ScheduleCreateRequest,
    ScheduleListResponse, ScheduleUpdateRequest, TextInputResponse, UploadedFile,
};
