mod home;
pub use home::Home;

mod signin;
pub use signin::Signin;

mod signup;
pub use signup::Signup;

/// Session storage backend for the current platform.
#[cfg(target_arch = "wasm32")]
pub(crate) type AppStore = store::LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub(crate) type AppStore = store::MemoryStore;

pub(crate) fn session_store() -> AppStore {
    AppStore::new()
}
