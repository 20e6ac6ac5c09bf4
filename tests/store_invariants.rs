//! Store Invariant Tests
//!
//! - At most one record per distinct value
//! - Record id is always the content hash of the value
//! - Records are removed on delete and never updated in place
//! - Operations are atomic under concurrent access

use std::sync::Arc;
use std::thread;

use stringlab::analyzer::content_hash;
use stringlab::store::{StoreError, StringStore};

// =============================================================================
// Uniqueness & Identity
// =============================================================================

#[test]
fn test_value_uniqueness_enforced() {
    let store = StringStore::new();

    store.insert("once").unwrap();
    assert_eq!(store.insert("once").unwrap_err(), StoreError::AlreadyExists);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_id_is_hash_of_value() {
    let store = StringStore::new();

    let record = store.insert("identify me").unwrap();
    assert_eq!(record.id, content_hash("identify me"));
    assert_eq!(record.id, record.properties.sha256_hash);
}

#[test]
fn test_record_round_trip_preserves_fields() {
    let store = StringStore::new();

    let inserted = store.insert("round trip").unwrap();
    let fetched = store.get("round trip").unwrap();

    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.value, inserted.value);
    assert_eq!(fetched.properties, inserted.properties);
    assert_eq!(fetched.created_at, inserted.created_at);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_delete_then_lookup_fails() {
    let store = StringStore::new();

    store.insert("ephemeral").unwrap();
    store.remove("ephemeral").unwrap();

    assert_eq!(store.get("ephemeral").unwrap_err(), StoreError::NotFound);
}

#[test]
fn test_deleted_value_can_be_reinserted() {
    let store = StringStore::new();

    let first = store.insert("again").unwrap();
    store.remove("again").unwrap();
    let second = store.insert("again").unwrap();

    // Same identity, fresh record.
    assert_eq!(first.id, second.id);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_list_reflects_inserts_and_removes() {
    let store = StringStore::new();

    for value in ["a", "b", "c", "d"] {
        store.insert(value).unwrap();
    }
    store.remove("b").unwrap();

    let mut values: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|r| r.value)
        .collect();
    values.sort();
    assert_eq!(values, vec!["a", "c", "d"]);
}

// =============================================================================
// Concurrency
// =============================================================================

/// Concurrent inserts of distinct values all land.
#[test]
fn test_concurrent_inserts() {
    let store = Arc::new(StringStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10 {
                    store.insert(&format!("value-{}-{}", i, j)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 80);
}

/// Concurrent inserts of the same value: exactly one wins.
#[test]
fn test_concurrent_duplicate_inserts() {
    let store = Arc::new(StringStore::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert("contended").is_ok())
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|inserted| *inserted)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
}
