//! Display ordering of lists.

use crate::types::TodoList;

/// Orders lists for display: incomplete lists first, complete lists last.
///
/// The partition is stable, so lists with the same completion status keep
/// their relative order. Each entry carries the list's position in
/// `lists`, which is what index-based routes address; the slice itself is
/// never reordered.
///
/// # Examples
///
/// ```
/// use todo_core::{sort_lists, Todo, TodoList};
///
/// let mut done = TodoList::new("Done");
/// done.todos.push(Todo::new("x"));
/// done.todos[0].completed = true;
/// let lists = vec![done, TodoList::new("Open")];
///
/// let order: Vec<usize> = sort_lists(&lists).into_iter().map(|(i, _)| i).collect();
/// assert_eq!(order, vec![1, 0]);
/// ```
pub fn sort_lists(lists: &[TodoList]) -> Vec<(usize, &TodoList)> {
    let mut ordered: Vec<(usize, &TodoList)> = lists.iter().enumerate().collect();
    // sort_by_key is stable
    ordered.sort_by_key(|(_, list)| list.is_complete());
    ordered
}
