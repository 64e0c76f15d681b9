//! Sign-in error taxonomy.

use thiserror::Error;

/// Fallback message for failures that carry no usable server message.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// How a sign-in attempt failed.
///
/// The variants are produced in priority order: local validation first,
/// then a received error response, then a request that got no response at
/// all, then everything else. `Display` is the exact message shown on the
/// form. Every variant is terminal for the attempt: nothing retries on
/// its own, the user resubmits.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SigninError {
    /// A required field was empty; the server was never contacted.
    #[error("Please fill in all fields")]
    Validation,

    /// The server answered with a non-success status. The payload's
    /// `message` field is surfaced verbatim when present.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_ERROR))]
    Rejected { message: Option<String> },

    /// The request went out but no response came back.
    #[error("No response from the server. Please try again.")]
    Unreachable,

    /// The request could not be built, or the success payload was unusable.
    #[error("{GENERIC_ERROR}")]
    Client,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        assert_eq!(
            SigninError::Validation.to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_rejected_uses_server_message() {
        let err = SigninError::Rejected {
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_rejected_falls_back_without_message() {
        let err = SigninError::Rejected { message: None };
        assert_eq!(err.to_string(), "An error occurred. Please try again.");
    }

    #[test]
    fn test_unreachable_message() {
        assert_eq!(
            SigninError::Unreachable.to_string(),
            "No response from the server. Please try again."
        );
    }

    #[test]
    fn test_client_message() {
        assert_eq!(
            SigninError::Client.to_string(),
            "An error occurred. Please try again."
        );
    }
}
