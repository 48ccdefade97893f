//! Server configuration.
//!
//! Configuration is read from an optional TOML file. Every section and
//! field has a default, so an empty file (or no file) yields a working
//! local server. Command-line flags override file values in `main`.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 4567
//!
//! [session]
//! cookie_name = "todo_session"
//! idle_timeout_secs = 3600
//!
//! [logging]
//! filter = "info,todo_web=debug,tower_http=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listener settings
    pub server: ServerConfig,

    /// Session cookie and lifetime settings
    pub session: SessionConfig,

    /// Log filter settings
    pub logging: LoggingConfig,
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host name or address to bind
    pub host: String,

    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4567,
        }
    }
}

/// Session transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session ID
    pub cookie_name: String,

    /// Seconds of inactivity after which a session expires
    pub idle_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "todo_session".to_string(),
            idle_timeout_secs: 3600,
        }
    }
}

impl SessionConfig {
    /// The idle timeout as a `Duration`.
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,todo_web=debug,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("server.host must not be empty"));
        }
        if self.session.idle_timeout_secs == 0 {
            return Err(Error::config(
                "session.idle_timeout_secs must be greater than zero",
            ));
        }
        let name = &self.session.cookie_name;
        let valid_name = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_name {
            return Err(Error::config(format!(
                "session.cookie_name '{name}' must be non-empty and use only letters, digits, '_' or '-'"
            )));
        }
        Ok(())
    }
}
