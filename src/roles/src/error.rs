//! Error types for role resolution and binding

use thiserror::Error;

/// Role subsystem errors
#[derive(Debug, Error)]
pub enum RoleError {
    /// Invalid argument (e.g. a non-type target for `authorizables_for`)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for role operations
pub type Result<T> = std::result::Result<T, RoleError>;
