//! Derived string properties and the analysis function.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Properties derived from a single input string.
///
/// All character-level counts are per Unicode scalar value (`char`),
/// not per byte and not per grapheme cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of characters in the input.
    pub length: usize,

    /// Whether the lowercased input reads the same in reverse.
    /// Case-insensitive; whitespace and punctuation are not stripped.
    pub is_palindrome: bool,

    /// Number of distinct characters (case-sensitive).
    pub unique_characters: usize,

    /// Number of whitespace-delimited tokens; 0 for blank input.
    pub word_count: usize,

    /// Hex-encoded SHA-256 digest of the input bytes.
    pub sha256_hash: String,

    /// Occurrence count per distinct character (case-sensitive).
    pub character_frequency_map: HashMap<char, usize>,
}

/// Analyze a string and return its derived properties.
///
/// Pure and deterministic: the same input always produces the same
/// output, and the input is never modified or rejected.
pub fn analyze(value: &str) -> StringProperties {
    let lowered = value.to_lowercase();
    let is_palindrome = lowered.chars().eq(lowered.chars().rev());

    let mut character_frequency_map: HashMap<char, usize> = HashMap::new();
    for c in value.chars() {
        *character_frequency_map.entry(c).or_insert(0) += 1;
    }

    StringProperties {
        length: value.chars().count(),
        is_palindrome,
        unique_characters: character_frequency_map.len(),
        word_count: value.split_whitespace().count(),
        sha256_hash: content_hash(value),
        character_frequency_map,
    }
}

/// Hex-encoded SHA-256 digest of a string.
///
/// Used both as the `sha256_hash` property and as the record id in the
/// store, so it must stay stable across releases.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
