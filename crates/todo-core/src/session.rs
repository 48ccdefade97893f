//! Per-session state and the operations request handlers perform on it.
//!
//! [`SessionState`] is the whole state bag for one client: the ordered
//! lists and a pending flash message. Every mutating operation validates
//! first and leaves the state untouched when it returns an error.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Flash, ListId, Todo, TodoId, TodoList};
use crate::validation::{validate_list_name, validate_todo_name};

/// The lists and pending message belonging to one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    lists: Vec<TodoList>,
    flash: Option<Flash>,
}

impl SessionState {
    /// Creates an empty session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in storage order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Looks up a list by ID.
    pub fn list(&self, id: ListId) -> Result<&TodoList> {
        self.lists
            .iter()
            .find(|list| list.id == id)
            .ok_or(Error::ListNotFound { id })
    }

    fn list_mut(&mut self, id: ListId) -> Result<&mut TodoList> {
        self.lists
            .iter_mut()
            .find(|list| list.id == id)
            .ok_or(Error::ListNotFound { id })
    }

    /// Looks up a list by its current position.
    pub fn list_at(&self, index: usize) -> Result<&TodoList> {
        self.lists
            .get(index)
            .ok_or(Error::ListIndexOutOfRange { index })
    }

    /// Resolves a list position to the list's stable ID.
    pub fn list_id_at(&self, index: usize) -> Result<ListId> {
        self.list_at(index).map(|list| list.id)
    }

    /// Resolves a todo position within a list to the todo's stable ID.
    pub fn todo_id_at(&self, list: ListId, index: usize) -> Result<TodoId> {
        self.list(list)?
            .todos
            .get(index)
            .map(|todo| todo.id)
            .ok_or(Error::TodoIndexOutOfRange { list, index })
    }

    /// Current position of a list.
    pub fn position_of(&self, id: ListId) -> Result<usize> {
        self.lists
            .iter()
            .position(|list| list.id == id)
            .ok_or(Error::ListNotFound { id })
    }

    /// Appends a new, empty list.
    pub fn create_list(&mut self, name: &str) -> Result<ListId> {
        validate_list_name(name, &self.lists, None)?;
        let list = TodoList::new(name);
        let id = list.id;
        self.lists.push(list);
        tracing::debug!(list_id = %id, "Created list");
        Ok(id)
    }

    /// Renames a list in place.
    ///
    /// Keeping the current name is allowed; taking another list's name is not.
    pub fn rename_list(&mut self, id: ListId, name: &str) -> Result<()> {
        self.list(id)?;
        validate_list_name(name, &self.lists, Some(id))?;
        self.list_mut(id)?.name = name.to_string();
        tracing::debug!(list_id = %id, "Renamed list");
        Ok(())
    }

    /// Removes a list, shifting the positions of every later list.
    pub fn delete_list(&mut self, id: ListId) -> Result<TodoList> {
        let index = self.position_of(id)?;
        let removed = self.lists.remove(index);
        tracing::debug!(list_id = %id, index, "Deleted list");
        Ok(removed)
    }

    /// Appends an uncompleted todo to a list.
    pub fn add_todo(&mut self, list: ListId, name: &str) -> Result<TodoId> {
        let target = self.list_mut(list)?;
        validate_todo_name(name)?;
        let todo = Todo::new(name);
        let id = todo.id;
        target.todos.push(todo);
        tracing::debug!(list_id = %list, todo_id = %id, "Added todo");
        Ok(id)
    }

    /// Removes a todo from a list.
    pub fn delete_todo(&mut self, list: ListId, todo: TodoId) -> Result<Todo> {
        let target = self.list_mut(list)?;
        let index = target
            .position_of(todo)
            .ok_or(Error::TodoNotFound { id: todo })?;
        let removed = target.todos.remove(index);
        tracing::debug!(list_id = %list, todo_id = %todo, "Deleted todo");
        Ok(removed)
    }

    /// Sets a todo's completion flag.
    pub fn set_todo_completed(&mut self, list: ListId, todo: TodoId, completed: bool) -> Result<()> {
        let entry = self
            .list_mut(list)?
            .todo_mut(todo)
            .ok_or(Error::TodoNotFound { id: todo })?;
        entry.completed = completed;
        tracing::debug!(list_id = %list, todo_id = %todo, completed, "Updated todo");
        Ok(())
    }

    /// Marks every todo of a list completed.
    pub fn complete_all(&mut self, list: ListId) -> Result<()> {
        let target = self.list_mut(list)?;
        for todo in &mut target.todos {
            todo.completed = true;
        }
        tracing::debug!(list_id = %list, todos = target.todos.len(), "Completed all todos");
        Ok(())
    }

    /// Stores a message for the next rendered page, replacing any pending one.
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Removes and returns the pending message.
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}
