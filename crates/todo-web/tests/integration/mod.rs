//! Integration tests grouped by resource.

mod sessions;
mod todos;
