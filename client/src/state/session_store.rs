//! Persisted session: the access token and the cached user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the auth controller holds a [`SessionStore`]; every other component
//! reads identity through the controller's state. The two keys are written
//! and cleared together so a token never outlives its user record (or the
//! reverse). The one exception is [`SessionStore::save_user`], which rewrites
//! the user key alone after a profile edit.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::net::types::User;

/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized [`User`].
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("user serialization failed: {0}")]
    Serialize(String),
}

/// Minimal string key-value backend.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Reads return `None` and writes fail outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok_or(StorageError::Unavailable)?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process backend; keeps nothing across reloads.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

pub struct SessionStore {
    backend: Box<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStorage + 'static) -> Self {
        Self { backend: Box::new(backend) }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }

    /// The persisted token; an empty value counts as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Persist a full session. On any failure both keys are removed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the user cannot be serialized or either
    /// write is refused.
    pub fn save(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        let written = self
            .backend
            .set(TOKEN_KEY, token)
            .and_then(|()| self.backend.set(USER_KEY, &raw));
        if written.is_err() {
            self.clear();
        }
        written
    }

    /// Replace only the cached user record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the user cannot be serialized or the
    /// write is refused.
    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let raw = serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(USER_KEY, &raw)
    }

    /// Remove both keys.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
