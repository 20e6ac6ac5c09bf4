//! The in-memory string store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::analyzer::content_hash;
use crate::observability::Logger;

use super::errors::{StoreError, StoreResult};
use super::record::StringRecord;

/// Content-addressed store of analyzed strings.
///
/// The map is keyed by the SHA-256 of the value, so lookup by value is
/// a hash computation plus one probe. Every operation takes the lock
/// for its full duration; no partial write is ever observable.
#[derive(Debug, Default)]
pub struct StringStore {
    records: RwLock<HashMap<String, StringRecord>>,
}

impl StringStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Analyze and insert a value.
    ///
    /// Rejects a value that is already stored; the store never holds
    /// two records with the same value.
    pub fn insert(&self, value: &str) -> StoreResult<StringRecord> {
        let id = content_hash(value);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        if records.contains_key(&id) {
            return Err(StoreError::AlreadyExists);
        }

        let record = StringRecord::new(value);
        records.insert(id, record.clone());
        drop(records);

        Logger::info("STRING_STORED", &[("id", &record.id)]);

        Ok(record)
    }

    /// Look up a record by exact value.
    pub fn get(&self, value: &str) -> StoreResult<StringRecord> {
        let id = content_hash(value);

        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        records.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    /// Remove a record by exact value.
    pub fn remove(&self, value: &str) -> StoreResult<()> {
        let id = content_hash(value);

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        records.remove(&id).ok_or(StoreError::NotFound)?;
        drop(records);

        Logger::info("STRING_DELETED", &[("id", &id)]);

        Ok(())
    }

    /// Snapshot of all records, in no particular order.
    pub fn list(&self) -> StoreResult<Vec<StringRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Internal("Lock poisoned".into()))?;

        Ok(records.values().cloned().collect())
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
