//! Session Manager for SecureGen.
//!
//! Holds the mock identity that gates history access. The identity is stored
//! under the `user` key and rehydrated when the manager is constructed.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::database::KeyValueStore;
use crate::types::errors::{SessionError, StorageError};
use crate::types::session::UserSession;

pub const SESSION_KEY: &str = "user";

/// Trait defining session management operations.
pub trait SessionManagerTrait {
    fn current_user(&self) -> Option<&UserSession>;
    fn login(&mut self, identity: UserSession) -> Result<(), SessionError>;
    fn logout(&mut self) -> Result<(), SessionError>;
    fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<UserSession, SessionError>;
    fn is_authenticated(&self) -> bool;
}

pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    current: Option<UserSession>,
}

impl SessionManager {
    /// Creates a SessionManager and restores any persisted identity.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let current = Self::restore(store.as_ref());
        Self { store, current }
    }

    fn restore(store: &dyn KeyValueStore) -> Option<UserSession> {
        let raw = match store.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read stored session");
                return None;
            }
        };

        match serde_json::from_str::<UserSession>(&raw) {
            Ok(user) => {
                info!(email = %user.email, "restored session");
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "corrupt session record; ignoring");
                None
            }
        }
    }

    fn require(field: &str, value: &str) -> Result<(), SessionError> {
        if value.trim().is_empty() {
            return Err(SessionError::InvalidIdentity(format!("{} is required", field)));
        }
        Ok(())
    }
}

impl SessionManagerTrait for SessionManager {
    fn current_user(&self) -> Option<&UserSession> {
        self.current.as_ref()
    }

    /// Persists `identity` and makes it the current session.
    fn login(&mut self, identity: UserSession) -> Result<(), SessionError> {
        Self::require("id", &identity.id)?;
        Self::require("email", &identity.email)?;
        Self::require("name", &identity.name)?;

        let json = serde_json::to_string(&identity)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set(SESSION_KEY, &json)?;

        info!(email = %identity.email, "logged in");
        self.current = Some(identity);
        Ok(())
    }

    fn logout(&mut self) -> Result<(), SessionError> {
        self.store.remove(SESSION_KEY)?;
        if self.current.take().is_some() {
            info!("logged out");
        }
        Ok(())
    }

    /// Mock registration: every field is required and both passwords must match.
    /// The password itself is never stored.
    fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<UserSession, SessionError> {
        Self::require("name", name)?;
        Self::require("email", email)?;
        Self::require("password", password)?;
        Self::require("confirm password", confirm)?;
        if password != confirm {
            return Err(SessionError::PasswordMismatch);
        }

        let user = UserSession {
            id: Uuid::new_v4().to_string(),
            email: email.trim().to_string(),
            name: name.trim().to_string(),
        };
        self.login(user.clone())?;
        Ok(user)
    }

    fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}
