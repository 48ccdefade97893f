//! Core types for todo lists.

mod flash;
mod ids;
mod list;
mod proptests;

pub use flash::Flash;
pub use ids::{ListId, TodoId};
pub use list::{NameSubject, Todo, TodoList};
