//! Stored record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze, StringProperties};

/// A stored string together with its analysis and metadata.
///
/// `id`, `value`, and `properties` are immutable once the record is
/// built; `id` always equals `properties.sha256_hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecord {
    /// Hex-encoded SHA-256 of `value`; also the store key.
    pub id: String,

    /// The original input string.
    pub value: String,

    /// Derived properties of `value`.
    pub properties: StringProperties,

    /// Insertion timestamp, serialized as an ISO-8601 string.
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze a value and build its record, stamped with the current time.
    pub fn new(value: &str) -> Self {
        let properties = analyze(value);
        Self {
            id: properties.sha256_hash.clone(),
            value: value.to_string(),
            properties,
            created_at: Utc::now(),
        }
    }
}
