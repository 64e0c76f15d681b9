//! # API crate: client for the remote authentication endpoint
//!
//! The frontend never talks to the auth server directly; it goes through
//! [`AuthClient`], which owns request/response handling and maps every
//! failure mode onto a single user-facing [`SigninError`]. The trait seam
//! ([`AuthApi`]) exists so the flow logic can run against a scripted fake
//! in tests.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Wire types, the [`AuthApi`] capability trait, response classification, and the `reqwest`-backed client |
//! | [`config`] | Endpoint configuration (base URL) |
//! | [`error`] | Sign-in error taxonomy; `Display` is the user-facing message |

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{AuthApi, AuthClient, Credentials, SigninResponse};
pub use config::AuthConfig;
pub use error::SigninError;
