//! # HTTP Server
//!
//! Axum router and handlers exposing the string store over HTTP/JSON.
//!
//! # Endpoints
//!
//! - `GET /` - Availability message
//! - `GET /health` - Health check
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings/:value` - Fetch a stored string
//! - `GET /strings` - List stored strings with optional filters
//! - `DELETE /strings/:value` - Delete a stored string

pub mod config;
pub mod errors;
pub mod filter;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use server::HttpServer;
