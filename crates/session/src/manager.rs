//! The injected owner of session state.
//!
//! One `SessionManager` per application instance, shared via `Arc`. It is
//! the [`TokenProvider`] the HTTP adapter reads, so a 401 from the backend
//! clears persisted credentials and drops the session in one place.

use std::sync::{Arc, RwLock};

use parkside_client::http::TokenProvider;
use parkside_core::error::DomainError;
use parkside_core::user::User;

use crate::state::SessionState;
use crate::store::{CredentialStore, StoreError, StoredCredentials};

/// Errors from session transitions and persistence.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The requested state transition is not allowed.
    #[error(transparent)]
    Transition(#[from] DomainError),

    /// Credentials could not be persisted or cleared.
    #[error("Failed to persist credentials: {0}")]
    Store(#[from] StoreError),
}

/// Holds the current [`SessionState`] and keeps it in step with the
/// credential store.
pub struct SessionManager {
    state: RwLock<SessionState>,
    store: Arc<dyn CredentialStore>,
}

impl SessionManager {
    /// A signed-out manager over the given store.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            state: RwLock::new(SessionState::Unauthenticated),
            store,
        }
    }

    /// A manager that restores a persisted session at startup. A missing or
    /// unreadable blob means signed out, never a crash.
    pub fn restore(store: Arc<dyn CredentialStore>) -> Self {
        let state = match store.load() {
            Ok(Some(StoredCredentials { token, user })) => {
                tracing::info!(user = %user.email, "Restored persisted session");
                SessionState::Authenticated { user, token }
            }
            Ok(None) => SessionState::Unauthenticated,
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore session, starting signed out");
                SessionState::Unauthenticated
            }
        };

        Self {
            state: RwLock::new(state),
            store,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// The signed-in user, when authenticated.
    pub fn user(&self) -> Option<User> {
        match &*self.read() {
            SessionState::Authenticated { user, .. } => Some(user.clone()),
            _ => None,
        }
    }

    /// Move to `Authenticating`. Fails unless currently signed out.
    pub fn begin_authentication(&self) -> Result<(), SessionError> {
        let mut guard = self.write();
        *guard = guard.clone().begin_authentication()?;
        Ok(())
    }

    /// Persist the verified credentials and move to `Authenticated`.
    ///
    /// The blob is written before the in-memory state commits, so a storage
    /// failure leaves the session in `Authenticating` for the caller to
    /// handle.
    pub fn complete_authentication(&self, user: User, token: String) -> Result<(), SessionError> {
        let mut guard = self.write();
        let next = guard.clone().complete_authentication(user.clone(), token.clone())?;
        self.store.save(&StoredCredentials { token, user: user.clone() })?;
        *guard = next;
        tracing::info!(user = %user.email, "Session established");
        Ok(())
    }

    /// Abandon an in-flight authentication. No-op in any other state, so a
    /// failed verify never knocks out an established session.
    pub fn fail_authentication(&self) {
        let mut guard = self.write();
        if matches!(*guard, SessionState::Authenticating) {
            *guard = SessionState::Unauthenticated;
        }
    }

    /// Clear persisted credentials and drop to `Unauthenticated`.
    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear() {
            // The in-memory session still ends; stale storage is the lesser
            // problem and is overwritten on the next login.
            tracing::warn!(error = %e, "Failed to clear persisted credentials");
        }
        let mut guard = self.write();
        *guard = guard.clone().sign_out();
        tracing::info!("Signed out");
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().expect("session state lock is never poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().expect("session state lock is never poisoned")
    }
}

impl TokenProvider for SessionManager {
    fn token(&self) -> Option<String> {
        match &*self.read() {
            SessionState::Authenticated { token, .. } => Some(token.clone()),
            _ => None,
        }
    }

    fn on_unauthorized(&self) {
        tracing::warn!("Backend rejected the session token, signing out");
        self.sign_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCredentialStore;

    fn user() -> User {
        User {
            id: "u_1".to_string(),
            name: "Jamie Rivera".to_string(),
            email: "jamie@example.com".to_string(),
            role: "TENANT".to_string(),
        }
    }

    #[test]
    fn login_persists_and_serves_the_token() {
        let store = Arc::new(MemoryCredentialStore::default());
        let manager = SessionManager::new(store.clone());

        manager.begin_authentication().unwrap();
        manager
            .complete_authentication(user(), "tok_abc".to_string())
            .unwrap();

        assert!(manager.is_authenticated());
        assert_eq!(manager.token().as_deref(), Some("tok_abc"));
        assert_eq!(store.load().unwrap().unwrap().token, "tok_abc");
    }

    #[test]
    fn restore_picks_up_persisted_session() {
        let store = Arc::new(MemoryCredentialStore::default());
        store
            .save(&StoredCredentials {
                token: "tok_old".to_string(),
                user: user(),
            })
            .unwrap();

        let manager = SessionManager::restore(store);
        assert!(manager.is_authenticated());
        assert_eq!(manager.token().as_deref(), Some("tok_old"));
    }

    #[test]
    fn unauthorized_response_clears_everything() {
        let store = Arc::new(MemoryCredentialStore::default());
        let manager = SessionManager::new(store.clone());
        manager.begin_authentication().unwrap();
        manager
            .complete_authentication(user(), "tok_abc".to_string())
            .unwrap();

        manager.on_unauthorized();

        assert!(!manager.is_authenticated());
        assert!(manager.token().is_none());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn failed_verification_returns_to_unauthenticated() {
        let manager = SessionManager::new(Arc::new(MemoryCredentialStore::default()));
        manager.begin_authentication().unwrap();
        manager.fail_authentication();
        assert_eq!(manager.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn fail_authentication_is_noop_when_signed_in() {
        let manager = SessionManager::new(Arc::new(MemoryCredentialStore::default()));
        manager.begin_authentication().unwrap();
        manager
            .complete_authentication(user(), "tok_abc".to_string())
            .unwrap();

        manager.fail_authentication();
        assert!(manager.is_authenticated());
    }
}
