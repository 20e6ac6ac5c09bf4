//! stringlab - a minimal string analysis and storage service
//!
//! Accepts strings over HTTP, computes descriptive properties (length,
//! palindrome check, character statistics, content hash), and keeps the
//! results in an in-memory, content-addressed store.

pub mod analyzer;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
