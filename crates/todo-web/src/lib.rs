//! # todo-web
//!
//! HTTP server for session-backed todo lists.
//!
//! This crate provides the web surface over [`todo_core`]:
//! - Cookie-based session transport as a Tower middleware
//! - Strict decoding of path and form parameters
//! - Request handlers for list and todo CRUD
//! - HTML views with one-shot flash messages
//! - Configuration loading and the server entry point

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod server;
pub mod session;
pub mod views;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{router, Server};
pub use session::{Session, SessionLayer, SessionStore};
