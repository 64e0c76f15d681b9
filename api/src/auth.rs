//! Wire types and the HTTP client for the sign-in endpoint.
//!
//! Classification of a received response is factored into a pure step so
//! the policy is testable without a network: a 2xx body must parse into
//! [`SigninResponse`]; any other status surfaces the payload's `message`
//! when one is present. Transport errors never reach classification;
//! they map straight to [`SigninError::Unreachable`], or to
//! [`SigninError::Client`] when the request could not even be built.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::SigninError;

/// Path of the sign-in endpoint, relative to the configured base URL.
pub const SIGNIN_PATH: &str = "/api/auth/signin";

/// Form credentials submitted to the sign-in endpoint.
///
/// Values go to the wire exactly as typed; no trimming or normalization.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Both fields non-empty. The only validation applied client-side.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful sign-in payload. The token is required; the username may be
/// absent for accounts that never set one.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SigninResponse {
    pub token: String,
    pub username: Option<String>,
}

/// Error payload an unsuccessful response may carry.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Capability trait for the authentication endpoint.
///
/// The production implementation is [`AuthClient`]; tests substitute a
/// scripted fake.
pub trait AuthApi {
    fn signin(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SigninResponse, SigninError>>;
}

/// Map a received response onto the sign-in outcome.
fn classify(status: u16, body: &[u8]) -> Result<SigninResponse, SigninError> {
    if (200..300).contains(&status) {
        // Success must supply a token; a 2xx without one is unusable.
        serde_json::from_slice(body).map_err(|_| SigninError::Client)
    } else {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message);
        Err(SigninError::Rejected { message })
    }
}

fn transport_error(err: reqwest::Error) -> SigninError {
    if err.is_builder() {
        SigninError::Client
    } else {
        SigninError::Unreachable
    }
}

/// `reqwest`-backed auth client; works on both native and wasm targets.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn signin_url(&self) -> String {
        format!("{}{}", self.base_url, SIGNIN_PATH)
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new(AuthConfig::default())
    }
}

impl AuthApi for AuthClient {
    async fn signin(&self, credentials: &Credentials) -> Result<SigninResponse, SigninError> {
        let response = self
            .http
            .post(self.signin_url())
            .json(credentials)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|_| SigninError::Unreachable)?;
        classify(status, &body)
    }
}
