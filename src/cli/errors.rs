//! CLI-specific error types
//!
//! Every CLI error aborts the process with a non-zero exit code.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// The PORT environment variable is not a valid port number
    #[error("Invalid PORT value: '{0}'")]
    InvalidPort(String),

    /// The async runtime could not be created
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(String),

    /// The HTTP server failed to bind or serve
    #[error("HTTP server failed: {0}")]
    Server(String),
}
