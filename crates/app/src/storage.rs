//! Where the session is persisted for the current platform.
//!
//! Web builds use the tab's `sessionStorage`, so each tab keeps its own
//! login and closing the tab forgets it. Other builds keep the session in
//! memory for the lifetime of the window.

#[cfg(feature = "web")]
use shared_types::{AppError, SessionStorage};

#[cfg(feature = "web")]
pub type AppStorage = BrowserSessionStorage;

#[cfg(not(feature = "web"))]
pub type AppStorage = shared_types::MemoryStorage;

/// Open the storage backing this window's session.
pub fn open_storage() -> AppStorage {
    #[cfg(feature = "web")]
    {
        BrowserSessionStorage::open()
    }
    #[cfg(not(feature = "web"))]
    {
        shared_types::MemoryStorage::new()
    }
}

/// `window.sessionStorage`, or nothing when the browser denies access.
#[cfg(feature = "web")]
pub struct BrowserSessionStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "web")]
impl BrowserSessionStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("sessionStorage is unavailable, logins will not survive a reload");
        }
        Self { storage }
    }
}

#[cfg(feature = "web")]
impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| AppError::storage("sessionStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("could not write {key}")))
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "could not remove session entry");
            }
        }
    }
}
