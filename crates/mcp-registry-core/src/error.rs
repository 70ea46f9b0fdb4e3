//! Error types for the registry.
//!
//! Startup failures (catalog missing, malformed, or invalid) and per-request
//! lookup misses share one enum so both layers can match on them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the registry library.
#[derive(Debug, Error)]
pub enum RegistryError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Catalog validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Duplicate server name in catalog: {name}")]
    DuplicateServer { name: String },

    // Lookup errors
    #[error("Server with name '{name}' does not exist")]
    ServerNotFound { name: String },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl RegistryError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RegistryError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Whether this is a per-request lookup miss rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::ServerNotFound { .. })
    }
}
