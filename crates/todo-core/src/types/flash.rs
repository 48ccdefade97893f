//! One-shot status messages.

use serde::{Deserialize, Serialize};

/// A message set by one request and shown by the next rendered page.
///
/// Stored in [`SessionState`](crate::SessionState) and removed by
/// [`SessionState::take_flash`](crate::SessionState::take_flash), so each
/// message is displayed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Flash {
    /// An operation completed.
    Success(String),

    /// An operation was rejected.
    Error(String),
}

impl Flash {
    /// Creates a success message.
    pub fn success<S: Into<String>>(message: S) -> Self {
        Flash::Success(message.into())
    }

    /// Creates an error message.
    pub fn error<S: Into<String>>(message: S) -> Self {
        Flash::Error(message.into())
    }

    /// Returns the message text.
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(message) | Flash::Error(message) => message,
        }
    }

    /// Returns `true` for error messages.
    pub fn is_error(&self) -> bool {
        matches!(self, Flash::Error(_))
    }

    /// CSS class used by the banner that displays this message.
    pub fn css_class(&self) -> &'static str {
        if self.is_error() {
            "flash error"
        } else {
            "flash success"
        }
    }
}
