//! Error types for todo-web

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::views;

/// Result type alias for todo-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in todo-web
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from todo-core
    #[error("{0}")]
    Core(#[from] todo_core::Error),

    /// A path or form parameter could not be decoded
    #[error("Invalid value for '{name}': '{value}'")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Raw value as received
        value: String,
    },

    /// A form body was missing a field or could not be decoded
    #[error("Invalid form submission: {0}")]
    Form(#[from] FormRejection),

    /// Configuration is missing, malformed or out of range
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (config files, socket binding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a parameter decoding error.
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Core(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Error::Core(err) if err.as_validation().is_some() => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidParameter { .. } | Error::Form(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, views::error_page(status, &self.to_string())).into_response()
    }
}
