//! Todo lists, todos and their derived state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{ListId, TodoId};

/// The kind of name being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NameSubject {
    /// The name of a todo list.
    List,

    /// The name of a todo.
    Todo,
}

impl fmt::Display for NameSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameSubject::List => write!(f, "Name"),
            NameSubject::Todo => write!(f, "Todo"),
        }
    }
}

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable identifier
    pub id: TodoId,

    /// What needs doing
    pub name: String,

    /// Whether it is done
    pub completed: bool,
}

impl Todo {
    /// Creates a new, uncompleted todo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            name: name.into(),
            completed: false,
        }
    }
}

/// A named, ordered collection of todos.
///
/// Completion is never stored; [`is_complete`](Self::is_complete) and the
/// counts are recomputed from `todos` on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Stable identifier
    pub id: ListId,

    /// Display name, unique within a session
    pub name: String,

    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Number of todos in the list.
    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    /// Number of todos not yet completed.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    /// Returns `true` if the list has todos and all of them are completed.
    ///
    /// An empty list is never complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_core::{Todo, TodoList};
    ///
    /// let mut list = TodoList::new("Groceries");
    /// assert!(!list.is_complete());
    ///
    /// list.todos.push(Todo::new("Milk"));
    /// list.todos[0].completed = true;
    /// assert!(list.is_complete());
    /// ```
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.remaining_count() == 0
    }

    /// CSS class for rendering this list, `Some("complete")` when complete.
    pub fn css_class(&self) -> Option<&'static str> {
        self.is_complete().then_some("complete")
    }

    /// Looks up a todo by ID for mutation.
    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    /// Current position of a todo in the list.
    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }
}
