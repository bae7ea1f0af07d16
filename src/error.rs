//! Crate-wide error type
//!
//! Every failure on the request path surfaces to the caller as a typed
//! `BoardError`; the API layer owns the single mapping to HTTP statuses.
//! No component retries internally.

use std::fmt;

/// Errors produced by the store, lifecycle, auth, and export components
#[derive(Debug)]
pub enum BoardError {
    /// Malformed or incomplete input; recoverable by resubmission
    Validation {
        /// Stable machine-readable code ("missing_required_fields", ...)
        code: &'static str,
        message: String,
    },
    /// Referenced event id does not exist
    NotFound { id: i64 },
    /// Credential check failed; unknown user and wrong password look alike
    Unauthorized,
    /// Underlying storage medium rejected the operation
    Storage(rusqlite::Error),
    /// Password hashing failed during account provisioning
    Hash(String),
}

impl BoardError {
    /// Validation failure with a stable code and a human-readable message
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Validation { message, .. } => write!(f, "{}", message),
            BoardError::NotFound { id } => write!(f, "Event {} not found", id),
            BoardError::Unauthorized => write!(f, "Invalid credentials"),
            BoardError::Storage(err) => write!(f, "Database error: {}", err),
            BoardError::Hash(msg) => write!(f, "Hash error: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for BoardError {
    fn from(err: rusqlite::Error) -> Self {
        BoardError::Storage(err)
    }
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
