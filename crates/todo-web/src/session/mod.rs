//! Session transport.
//!
//! Provides:
//! - [`SessionStore`] - In-memory map from session ID to [`SessionState`](todo_core::SessionState)
//! - [`Session`] - Handle to one session's state, available to handlers as a request extension
//! - [`SessionLayer`] / [`SessionService`] - Tower middleware that resolves the session cookie

mod middleware;
mod store;

pub use middleware::{session_id_from_headers, SessionLayer, SessionService};
pub use store::{Session, SessionId, SessionStore};
