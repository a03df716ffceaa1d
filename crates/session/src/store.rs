//! Credential persistence: the portal stores exactly one token/user pair.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use parkside_core::user::User;

/// The persisted session blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub user: User,
}

/// Errors from credential storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("Credential storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored blob no longer parses.
    #[error("Credential storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where the token/user pair lives between launches. Web builds use local
/// storage, mobile builds use the OS keychain; this trait is the seam.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredCredentials>, StoreError>;
    fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Keeps credentials for the lifetime of the process. Used by tests and
/// tools that must not touch disk.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<StoredCredentials>>,
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<StoredCredentials>, StoreError> {
        Ok(self.slot.lock().expect("credential slot is never poisoned").clone())
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError> {
        *self.slot.lock().expect("credential slot is never poisoned") = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().expect("credential slot is never poisoned") = None;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File store
// ---------------------------------------------------------------------------

/// JSON file store. The blob is tiny, so plain synchronous I/O is fine.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by the given file path. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<StoredCredentials>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, credentials: &StoredCredentials) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            token: "tok_abc".to_string(),
            user: User {
                id: "u_1".to_string(),
                name: "Jamie Rivera".to_string(),
                email: "jamie@example.com".to_string(),
                role: "TENANT".to_string(),
            },
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCredentialStore::default();
        assert!(store.load().unwrap().is_none());

        store.save(&credentials()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&credentials()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials()));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing twice is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/dir/session.json"));
        store.save(&credentials()).unwrap();
        assert!(store.load().unwrap().is_some());
    }

    #[test]
    fn corrupt_file_surfaces_as_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
