//! # String Analyzer
//!
//! The pure transform from an input string to its derived properties.
//! Analysis is deterministic and has no failure modes: every string,
//! including the empty string, is a valid input.

mod properties;

pub use properties::{analyze, content_hash, StringProperties};
