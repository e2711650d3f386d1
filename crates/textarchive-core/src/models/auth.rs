use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Session issued by register/login.
///
/// The backend does not always echo the username, and `expires_at` is only
/// informative: the client never refreshes or checks expiry itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    pub expires_at: Option<DateTime<Utc>>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Currently authenticated user, from `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_without_optional_fields() {
        let json = r#"{"access_token":"abc","user_id":"u1"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.access_token, "abc");
        assert_eq!(auth.token_type, "bearer");
        assert_eq!(auth.username, None);
        assert_eq!(auth.expires_at, None);
    }

    #[test]
    fn auth_response_with_backend_expiry() {
        let json = r#"{
            "access_token": "abc",
            "token_type": "bearer",
            "user_id": "u1",
            "username": "alice",
            "expires_at": "2024-01-02T03:04:05.000001"
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.username.as_deref(), Some("alice"));
        assert!(auth.expires_at.is_some());
    }
}
