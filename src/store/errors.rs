//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// String store errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same value is already stored
    #[error("String already exists")]
    AlreadyExists,

    /// No record with the requested value
    #[error("String not found")]
    NotFound,

    /// Internal error (lock poisoned)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::AlreadyExists => 409,
            StoreError::NotFound => 404,
            StoreError::Internal(_) => 500,
        }
    }
}
