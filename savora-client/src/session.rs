//! Session store - durable login state
//!
//! Persists the current session (token, role, identity) between app
//! launches. Storage failures are logged and fall open to a guest
//! session rather than surfacing to callers.

use shared::models::session::{Role, Session};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Partial session update; only the provided fields are merged
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub partner_active: Option<bool>,
    pub onboarded: Option<bool>,
    pub selected_location: Option<String>,
}

impl SessionPatch {
    fn apply(self, session: &mut Session) {
        if let Some(token) = self.token {
            session.token = Some(token);
        }
        if let Some(role) = self.role {
            session.role = role;
        }
        if let Some(user_id) = self.user_id {
            session.user_id = Some(user_id);
        }
        if let Some(name) = self.name {
            session.name = Some(name);
        }
        if let Some(email) = self.email {
            session.email = Some(email);
        }
        if let Some(partner_active) = self.partner_active {
            session.partner_active = partner_active;
        }
        if let Some(onboarded) = self.onboarded {
            session.onboarded = onboarded;
        }
        if let Some(selected_location) = self.selected_location {
            session.selected_location = Some(selected_location);
        }
    }
}

/// Session persistence manager
///
/// File layout: `{data_dir}/session.json`
pub struct SessionStore {
    file_path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("session.json"),
        }
    }

    /// Load the last persisted session, or guest defaults
    pub fn load(&self) -> Session {
        match self.try_load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to load session, falling back to guest: {}", e);
                Session::guest()
            }
        }
    }

    fn try_load(&self) -> Result<Session, SessionStoreError> {
        if !self.file_path.exists() {
            return Ok(Session::guest());
        }

        let content = std::fs::read_to_string(&self.file_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Merge the patch into the persisted session and write it back
    ///
    /// Returns the merged session. Write failures are logged and the
    /// merged session is still returned (fail open).
    pub fn save(&self, patch: SessionPatch) -> Session {
        let mut session = self.load();
        patch.apply(&mut session);

        if let Err(e) = self.persist(&session) {
            tracing::warn!("Failed to persist session: {}", e);
        }

        session
    }

    fn persist(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.file_path, content)?;
        tracing::debug!(role = %session.role, "Session saved");
        Ok(())
    }

    /// Reset to guest defaults and remove the persisted file
    pub fn clear(&self) -> Session {
        if self.file_path.exists() {
            if let Err(e) = std::fs::remove_file(&self.file_path) {
                tracing::warn!("Failed to clear session file: {}", e);
            } else {
                tracing::debug!("Session cleared");
            }
        }
        Session::guest()
    }

    /// Path of the backing file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
