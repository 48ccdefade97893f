//! Request parameter decoding.
//!
//! Path segments and form fields arrive as strings. Conversions here are
//! strict: a malformed index or flag is an error, never a silent default.

use serde::Deserialize;

use crate::{Error, Result};

/// Parse a positional index from a path segment.
///
/// Only plain ASCII digits are accepted.
///
/// # Examples
///
/// ```
/// use todo_web::params::parse_index;
///
/// assert_eq!(parse_index("index", "2").unwrap(), 2);
/// assert!(parse_index("index", "-1").is_err());
/// assert!(parse_index("index", "2abc").is_err());
/// ```
pub fn parse_index(name: &'static str, raw: &str) -> Result<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_parameter(name, raw));
    }
    raw.parse()
        .map_err(|_| Error::invalid_parameter(name, raw))
}

/// Parse a boolean form flag; only `"true"` and `"false"` are accepted.
pub fn parse_flag(name: &'static str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_parameter(name, raw)),
    }
}

/// Body of `POST /lists`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewListForm {
    /// Requested list name
    pub list_name: String,
}

impl NewListForm {
    /// The name with surrounding whitespace removed.
    pub fn name(&self) -> &str {
        self.list_name.trim()
    }
}

/// Body of `POST /lists/{index}`.
#[derive(Debug, Clone, Deserialize)]
pub struct EditListForm {
    /// Replacement list name
    pub new_list_name: String,
}

impl EditListForm {
    /// The name with surrounding whitespace removed.
    pub fn name(&self) -> &str {
        self.new_list_name.trim()
    }
}

/// Body of `POST /lists/{index}/todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoForm {
    /// Todo text
    pub todo: String,
}

impl TodoForm {
    /// The text with surrounding whitespace removed.
    pub fn name(&self) -> &str {
        self.todo.trim()
    }
}

/// Body of `POST /lists/{index}/todos/{todo_index}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionForm {
    /// `"true"` or `"false"`
    pub completed: String,
}

impl CompletionForm {
    /// The decoded completion flag.
    pub fn completed(&self) -> Result<bool> {
        parse_flag("completed", &self.completed)
    }
}
