//! Gate-specific error types.

use serde::Serialize;

/// Error codes understood by the identity platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The sign-in attempt itself is unacceptable (missing, malformed, or
    /// unapproved email). The user can act on this.
    InvalidArgument,

    /// Evaluation failed for reasons unrelated to the attempt.
    Internal,
}

/// A structured deny returned to the identity platform.
///
/// Both deny kinds block the sign-in; `code` tells the platform (and the
/// status mapping) whose fault it was.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GateError {
    /// Machine-readable error kind.
    pub code: ErrorCode,
    /// Human-readable message surfaced to the signing-in user.
    pub message: String,
}

impl GateError {
    /// A client-error deny with a human-actionable message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidArgument,
            message: message.into(),
        }
    }

    /// An internal-error deny with a generic, retry-suggesting message.
    ///
    /// Deliberately carries no detail about what went wrong.
    pub fn internal() -> Self {
        Self {
            code: ErrorCode::Internal,
            message: "Sign-in could not be evaluated. Please try again.".to_string(),
        }
    }

    /// Whether this deny is the user's fault rather than ours.
    pub fn is_client_error(&self) -> bool {
        matches!(self.code, ErrorCode::InvalidArgument)
    }
}
