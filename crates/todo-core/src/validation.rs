//! Name validation rules.
//!
//! Both validators are pure and must run before any mutation. Length is
//! counted in characters, not bytes.

use crate::error::ValidationError;
use crate::types::{ListId, NameSubject, TodoList};

/// Shortest accepted list or todo name.
pub const NAME_MIN_LEN: usize = 1;

/// Longest accepted list or todo name.
pub const NAME_MAX_LEN: usize = 200;

fn check_length(candidate: &str, subject: NameSubject) -> Result<(), ValidationError> {
    let len = candidate.chars().count();
    if (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength { subject })
    }
}

/// Validates a list name against the lists already in the session.
///
/// Duplicates are checked first and by exact, case-sensitive comparison.
/// When `renaming` names a list, that list is left out of the duplicate
/// check so a list may keep its own name.
///
/// # Examples
///
/// ```
/// use todo_core::{validate_list_name, TodoList, ValidationError};
///
/// let lists = vec![TodoList::new("Groceries")];
/// assert_eq!(
///     validate_list_name("Groceries", &lists, None),
///     Err(ValidationError::DuplicateName)
/// );
/// assert!(validate_list_name("groceries", &lists, None).is_ok());
/// assert!(validate_list_name("Groceries", &lists, Some(lists[0].id)).is_ok());
/// ```
pub fn validate_list_name(
    candidate: &str,
    existing: &[TodoList],
    renaming: Option<ListId>,
) -> Result<(), ValidationError> {
    let duplicate = existing
        .iter()
        .filter(|list| Some(list.id) != renaming)
        .any(|list| list.name == candidate);
    if duplicate {
        return Err(ValidationError::DuplicateName);
    }
    check_length(candidate, NameSubject::List)
}

/// Validates a todo name.
pub fn validate_todo_name(candidate: &str) -> Result<(), ValidationError> {
    check_length(candidate, NameSubject::Todo)
}
