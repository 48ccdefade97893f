#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Todo Core Library
//!
//! Domain types and rules for the session-backed todo-list application:
//! lists and todos with stable identifiers, name validation, derived
//! completion state, display ordering, and the per-session state bag that
//! request handlers mutate.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: Identifiers, lists, todos and flash messages
//! - [`validation`]: Name validation rules
//! - [`sort`]: Display ordering of lists
//! - [`session`]: Per-session state and its operations

pub mod error;
pub mod session;
pub mod sort;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use error::{Error, Result, ValidationError};
pub use session::SessionState;
pub use sort::sort_lists;
pub use types::{Flash, ListId, NameSubject, Todo, TodoId, TodoList};
pub use validation::{validate_list_name, validate_todo_name, NAME_MAX_LEN, NAME_MIN_LEN};
