//! This crate contains all shared UI for the workspace.

pub mod components;

mod signin;
pub use signin::{authenticate, Field, SigninFlow, SigninState};
