//! Error types for the todo core library.

use crate::types::{ListId, NameSubject, TodoId};
use crate::validation::{NAME_MAX_LEN, NAME_MIN_LEN};

/// A rejected list or todo name.
///
/// The `Display` output is the message shown to the user in the error
/// banner, so it is phrased for people rather than logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Another list in the session already has exactly this name.
    #[error("Sorry, that name has been used already.")]
    DuplicateName,

    /// The name is shorter or longer than the allowed range.
    #[error(
        "{subject} must be between {min} and {max} characters.",
        min = NAME_MIN_LEN,
        max = NAME_MAX_LEN
    )]
    InvalidLength {
        /// Which kind of name was rejected
        subject: NameSubject,
    },
}

/// Errors that can occur while operating on session state.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A submitted name failed validation; nothing was changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No list with this identifier exists in the session.
    #[error("List not found: {id}")]
    ListNotFound {
        /// List ID that was not found
        id: ListId,
    },

    /// No todo with this identifier exists in the list.
    #[error("Todo not found: {id}")]
    TodoNotFound {
        /// Todo ID that was not found
        id: TodoId,
    },

    /// A positional list index does not resolve to a list.
    #[error("No list at index {index}")]
    ListIndexOutOfRange {
        /// The requested index
        index: usize,
    },

    /// A positional todo index does not resolve to a todo of the list.
    #[error("No todo at index {index} in list {list}")]
    TodoIndexOutOfRange {
        /// List the todo was looked up in
        list: ListId,
        /// The requested index
        index: usize,
    },
}

/// Convenience `Result` type alias for todo core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error means the addressed entry does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ListNotFound { .. }
            | Error::TodoNotFound { .. }
            | Error::ListIndexOutOfRange { .. }
            | Error::TodoIndexOutOfRange { .. } => true,
            Error::Validation(_) => false,
        }
    }

    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}
