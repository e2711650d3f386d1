//! Authentication endpoints.
//!
//! `register` and `login` only return the issued session; storing it is up to
//! the caller (`AuthStore::set_auth`). `logout` is local and never fails.

use textarchive_core::models::{AuthResponse, CurrentUser, LoginRequest, RegisterRequest};

use crate::{ApiClient, Result};

impl ApiClient {
    /// Create an account. `POST /auth/register`
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let body = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/register", &body).await
    }

    /// Exchange credentials for a token. `POST /auth/login`
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    /// Drop the local session. No request is sent.
    pub fn logout(&self) {
        if let Some(session) = self.session() {
            session.clear_auth();
            tracing::info!("Logged out");
        }
    }

    /// Profile of the authenticated user. `GET /auth/me`
    pub async fn current_user(&self) -> Result<CurrentUser> {
        self.get("/auth/me", &[]).await
    }
}
