use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, TOKEN_KEY, USERNAME_KEY};

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "first");
        store.set(TOKEN_KEY, "second");
        assert_eq!(store.get(TOKEN_KEY), Some("second".to_string()));
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set(TOKEN_KEY, "abc");
        assert_eq!(other.get(TOKEN_KEY), Some("abc".to_string()));
    }

    #[test]
    fn test_session_absent_without_token() {
        let store = MemoryStore::new();
        assert!(Session::load(&store).is_none());

        // A stray username on its own is not a session.
        store.set(USERNAME_KEY, "bob");
        assert!(Session::load(&store).is_none());
    }

    #[test]
    fn test_session_roundtrip() {
        let store = MemoryStore::new();
        let session = Session {
            token: "abc".to_string(),
            username: Some("bob".to_string()),
        };
        session.persist(&store);

        assert_eq!(store.get(TOKEN_KEY), Some("abc".to_string()));
        assert_eq!(store.get(USERNAME_KEY), Some("bob".to_string()));
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn test_session_without_username_writes_no_username_key() {
        let store = MemoryStore::new();
        let session = Session {
            token: "abc".to_string(),
            username: None,
        };
        session.persist(&store);

        assert_eq!(store.get(TOKEN_KEY), Some("abc".to_string()));
        assert_eq!(store.get(USERNAME_KEY), None);
    }
}
