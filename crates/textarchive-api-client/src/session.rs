//! Session state shared between the login flow and the HTTP client.
//!
//! [`AuthStore`] is the single owner of the current token and user id. It is
//! created once by the application root and handed to whatever needs it as an
//! `Arc<AuthStore>`. Both fields live in one `watch` value, so a reader sees
//! either the old session or the new one, never a mix.

use std::sync::Arc;

use textarchive_core::KeyValueStore;
use tokio::sync::watch;

use crate::error::Result;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the user id.
pub const USER_ID_KEY: &str = "userId";

/// Snapshot of the session fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

pub struct AuthStore {
    storage: Arc<dyn KeyValueStore>,
    state: watch::Sender<SessionState>,
}

impl AuthStore {
    /// Load the persisted session, if any. Unreadable storage counts as logged out.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let read = |key: &str| match storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, key, "Failed to read persisted session");
                None
            }
        };
        let initial = SessionState {
            token: read(TOKEN_KEY),
            user_id: read(USER_ID_KEY),
        };
        let (state, _) = watch::channel(initial);
        Self { storage, state }
    }

    /// Persist and publish a new session. Both keys are written together;
    /// if persisting fails the in-memory session is left untouched.
    pub fn set_auth(&self, token: &str, user_id: &str) -> Result<()> {
        self.storage
            .set_many(&[(TOKEN_KEY, token), (USER_ID_KEY, user_id)])?;
        self.state.send_replace(SessionState {
            token: Some(token.to_string()),
            user_id: Some(user_id.to_string()),
        });
        tracing::debug!(user_id, "Session stored");
        Ok(())
    }

    /// Forget the session in memory and in storage. Never fails.
    pub fn clear_auth(&self) {
        if let Err(e) = self.storage.remove_many(&[TOKEN_KEY, USER_ID_KEY]) {
            tracing::warn!(error = %e, "Failed to remove persisted session");
        }
        self.state.send_replace(SessionState::default());
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.borrow().user_id.clone()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every `set_auth` / `clear_auth`.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("authenticated", &self.is_authenticated())
            .field("user_id", &self.user_id())
            .finish()
    }
}
