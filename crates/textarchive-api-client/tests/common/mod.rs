#![allow(dead_code)]

use std::sync::Arc;

use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use textarchive_api_client::{ApiClient, AuthStore};
use textarchive_core::MemoryStore;

/// Path prefix the backend mounts its routers under.
pub const PREFIX: &str = "/api/v1";

pub fn api_path(path: &str) -> String {
    format!("{}{}", PREFIX, path)
}

/// Mock backend plus a client pointed at it, sharing an in-memory session.
pub struct TestBackend {
    pub server: ServerGuard,
    pub client: ApiClient,
    pub session: Arc<AuthStore>,
    pub storage: Arc<MemoryStore>,
}

pub async fn setup() -> TestBackend {
    let server = Server::new_async().await;
    let storage = Arc::new(MemoryStore::new());
    let session = Arc::new(AuthStore::new(storage.clone()));
    let client = ApiClient::new(
        format!("{}{}", server.url(), PREFIX),
        textarchive_api_client::Auth::Session(session.clone()),
    )
    .expect("Failed to create API client");

    TestBackend {
        server,
        client,
        session,
        storage,
    }
}

/// Same as [`setup`] with a session already stored.
pub async fn setup_logged_in(token: &str, user_id: &str) -> TestBackend {
    let backend = setup().await;
    backend
        .session
        .set_auth(token, user_id)
        .expect("Failed to store session");
    backend
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn memo_json(id: &str, content: &str, tags: Option<&str>) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "content": content,
        "summary": content,
        "tags": tags,
        "created_at": "2024-01-15T09:30:00.123456",
        "updated_at": "2024-01-15T09:30:00.123456"
    })
}

pub fn schedule_json(id: &str, date: Option<&str>, time: Option<&str>) -> Value {
    json!({
        "id": id,
        "user_id": "user-1",
        "date": date,
        "time": time,
        "description": "team meeting",
        "original_text": "team meeting tomorrow 14:30",
        "created_at": "2024-01-15T09:30:00",
        "updated_at": "2024-01-15T09:30:00"
    })
}

pub fn uploaded_file_json(id: &str, filename: &str) -> Value {
    json!({
        "file_id": id,
        "filename": filename,
        "file_path": format!("uploads/user-1/{}", filename),
        "file_size": 11,
        "content_type": "image/png",
        "uploaded_at": "2024-01-15T09:30:00"
    })
}

pub fn auth_json(token: &str, user_id: &str) -> Value {
    json!({
        "access_token": token,
        "token_type": "bearer",
        "user_id": user_id,
        "expires_at": "2024-01-16T09:30:00"
    })
}
