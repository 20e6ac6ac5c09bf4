//! # Observability
//!
//! Structured JSON logging: one log line = one event, synchronous,
//! deterministic field ordering.
//!
//! # Example
//!
//! ```ignore
//! Logger::info("STRING_STORED", &[("id", "9f86d081...")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
