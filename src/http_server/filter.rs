//! # List Filters
//!
//! Query-option evaluation for `GET /strings`. Each option is
//! independently optional and all present options are AND-combined.
//!
//! Raw query values are kept as strings and interpreted here, because
//! the interpretation carries deliberate quirks inherited from the
//! service's wire contract:
//!
//! - `is_palindrome` applies whenever the key is present; any value
//!   other than exactly `"true"` selects non-palindromes.
//! - Numeric options (`min_length`, `max_length`, `word_count`) and
//!   `contains_character` are skipped when the raw value is empty.
//! - A numeric option that fails to parse matches no record at all.

use std::collections::HashMap;

use crate::store::StringRecord;

/// Recognized filter options for the list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl ListFilters {
    /// Extract the recognized options from a raw query map.
    ///
    /// Unrecognized keys are ignored here; the handler still echoes the
    /// full map back as `filters_applied`.
    pub fn from_query(query: &HashMap<String, String>) -> Self {
        Self {
            is_palindrome: query.get("is_palindrome").cloned(),
            min_length: query.get("min_length").cloned(),
            max_length: query.get("max_length").cloned(),
            word_count: query.get("word_count").cloned(),
            contains_character: query.get("contains_character").cloned(),
        }
    }

    /// Check whether a record passes every present filter.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(raw) = self.is_palindrome.as_deref() {
            if record.properties.is_palindrome != (raw == "true") {
                return false;
            }
        }

        if !numeric_filter(self.min_length.as_deref(), |n| {
            record.properties.length as i64 >= n
        }) {
            return false;
        }

        if !numeric_filter(self.max_length.as_deref(), |n| {
            record.properties.length as i64 <= n
        }) {
            return false;
        }

        if !numeric_filter(self.word_count.as_deref(), |n| {
            record.properties.word_count as i64 == n
        }) {
            return false;
        }

        match self.contains_character.as_deref() {
            None | Some("") => true,
            Some(needle) => record.value.contains(needle),
        }
    }
}

/// Evaluate one numeric option.
///
/// Absent or empty raw values leave the record in; an unparseable value
/// matches nothing. Both behaviors are part of the wire contract.
fn numeric_filter<F>(raw: Option<&str>, predicate: F) -> bool
where
    F: Fn(i64) -> bool,
{
    match raw {
        None | Some("") => true,
        Some(s) => match s.parse::<i64>() {
            Ok(n) => predicate(n),
            Err(_) => false,
        },
    }
}
