//! Session model and the storage capability it persists through.

use serde::{Deserialize, Serialize};

/// Storage key for the session token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the signed-in user's name.
pub const USERNAME_KEY: &str = "username";

/// Durable key-value storage for session state.
///
/// Implementations live in sibling modules ([`MemoryStore`] for tests and
/// native fallback, `LocalStorage` for the browser). The interface is
/// synchronous because every backend here is; values survive page reloads on
/// backends that actually persist. Expiry is not this layer's concern.
///
/// [`MemoryStore`]: crate::MemoryStore
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// A signed-in session as issued by the auth endpoint.
///
/// A session is either fully present (token set, username optional) or
/// absent: [`Session::load`] returns `None` unless a token is stored, and
/// [`Session::persist`] writes the token before the optional username, so a
/// username can never exist without a token in the same store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: Option<String>,
}

impl Session {
    /// Read the session from storage. `None` when no token is stored.
    pub fn load<S: SessionStore>(store: &S) -> Option<Self> {
        let token = store.get(TOKEN_KEY)?;
        Some(Self {
            token,
            username: store.get(USERNAME_KEY),
        })
    }

    /// Write the session to storage: the token first, then the username
    /// only when one accompanied the auth response.
    pub fn persist<S: SessionStore>(&self, store: &S) {
        store.set(TOKEN_KEY, &self.token);
        if let Some(username) = &self.username {
            store.set(USERNAME_KEY, username);
        }
    }
}
