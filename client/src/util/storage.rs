//! Credential token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the access token here; the session gate reads it on
//! every guarded mount. Browser builds use `localStorage`, while native
//! builds see an empty store so SSR-free tests stay deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex};

/// `localStorage` key holding the access token.
pub const TOKEN_KEY: &str = "token";

/// Failure persisting the credential.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("token storage is not available")]
    Unavailable,
    #[error("could not store token: {0}")]
    Write(String),
}

/// Read/write access to the persisted credential.
pub trait TokenStore {
    /// Stored token; empty strings count as absent.
    fn token(&self) -> Option<String>;

    /// Persist `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when there is no backing store or the
    /// write is refused (quota exceeded, storage disabled).
    fn save_token(&self, token: &str) -> Result<(), StorageError>;

    fn clear_token(&self);
}

/// `localStorage`-backed token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(TOKEN_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store, shared across clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token.to_owned()))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone()).and_then(non_empty)
    }

    fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let mut slot = self.slot.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
