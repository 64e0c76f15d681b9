//! `localStorage`-backed session store for the web platform.
//!
//! Storage failures degrade to "no session" rather than crashing: reads
//! return `None` and writes are dropped when `localStorage` is unavailable
//! (private browsing, storage disabled). The server remains the authority
//! on whether a stored token is still good.

use crate::session::SessionStore;

/// Browser `localStorage` SessionStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
}
