//! The sign-in flow: form field state, the submission state machine, and
//! the pipeline that runs one authentication attempt end to end.
//!
//! The machine owns everything that happens between a submit event and its
//! outcome. One attempt is in flight at most: a submit while `Submitting`
//! is rejected, and a completion that lands after the machine has moved on
//! is dropped, so a slow response can neither stomp a newer attempt nor
//! navigate twice.

use api::{AuthApi, Credentials, SigninError};
use store::{Session, SessionStore};

/// Identifies an editable form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Where the current submission stands.
///
/// `Failed` doubles as "idle with the message visible": the machine accepts
/// a new submission from it, and the message stays up until the next
/// attempt clears it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SigninState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Form state plus the machine driving one sign-in attempt at a time.
#[derive(Clone, Debug)]
pub struct SigninFlow {
    form: Credentials,
    state: SigninState,
}

impl Default for SigninFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SigninFlow {
    pub fn new() -> Self {
        Self {
            form: Credentials::default(),
            state: SigninState::Idle,
        }
    }

    pub fn form(&self) -> &Credentials {
        &self.form
    }

    pub fn state(&self) -> &SigninState {
        &self.state
    }

    /// Replace one field's value. Fields are addressed independently and
    /// nothing is validated while typing.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.form.email = value,
            Field::Password => self.form.password = value,
        }
    }

    /// The message from the last failed attempt, while one is visible.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SigninState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SigninState::Submitting
    }

    /// Start a submission attempt.
    ///
    /// Clears the previous attempt's message, validates field presence, and
    /// hands back the credentials to send. Returns `None` when a request is
    /// already in flight (the event is rejected, not queued) or when
    /// validation fails; either way no request may be issued.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.state == SigninState::Submitting {
            return None;
        }
        self.state = SigninState::Validating;
        if !self.form.is_complete() {
            self.state = SigninState::Failed(SigninError::Validation.to_string());
            return None;
        }
        self.state = SigninState::Submitting;
        Some(self.form.clone())
    }

    /// Feed the attempt's outcome back into the machine.
    ///
    /// Returns the session to navigate on. A completion arriving when the
    /// machine is not `Submitting` is stale and gets dropped.
    pub fn complete(&mut self, result: Result<Session, SigninError>) -> Option<Session> {
        if self.state != SigninState::Submitting {
            return None;
        }
        match result {
            Ok(session) => {
                tracing::debug!("sign-in succeeded");
                self.state = SigninState::Succeeded;
                Some(session)
            }
            Err(err) => {
                tracing::warn!("sign-in failed: {err}");
                self.state = SigninState::Failed(err.to_string());
                None
            }
        }
    }
}

/// Run one authentication attempt: send the credentials, classify the
/// outcome, and persist the session on success. The token is written
/// first, then the username when one accompanied the response.
pub async fn authenticate<A, S>(
    api: &A,
    store: &S,
    credentials: &Credentials,
) -> Result<Session, SigninError>
where
    A: AuthApi,
    S: SessionStore,
{
    let response = api.signin(credentials).await?;
    let session = Session {
        token: response.token,
        username: response.username,
    };
    session.persist(store);
    Ok(session)
}
