//! # Ledger Store Port
//!
//! The per-service key/value store every ledger owns: `get`, `put` and a
//! selector query. Writes are last-writer-wins per key; there is no
//! versioning, no compare-and-swap and no multi-key transaction.
//!
//! A read followed by a write from one request is therefore NOT isolated
//! from the same sequence in a concurrent request.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::trace;

/// Storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store refused or failed the write.
    #[error("write failed for key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// The store failed the read.
    #[error("read failed for key '{key}': {message}")]
    ReadFailed { key: String, message: String },
}

/// A stored key with its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub key: String,
    pub value: Vec<u8>,
}

/// Field-equality predicate over JSON-encoded values.
///
/// Values that are not JSON objects never match.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    fields: Vec<(String, Value)>,
}

impl Selector {
    /// Match records whose `field` equals `value`.
    pub fn field_eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            fields: vec![(field.into(), value.into())],
        }
    }

    /// Additionally require `field` to equal `value`.
    #[must_use]
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    /// Evaluate against raw stored bytes.
    #[must_use]
    pub fn matches(&self, raw: &[u8]) -> bool {
        let Ok(Value::Object(object)) = serde_json::from_slice::<Value>(raw) else {
            return false;
        };
        self.fields
            .iter()
            .all(|(field, expected)| object.get(field) == Some(expected))
    }
}

/// Key/value store owned by a single service.
pub trait LedgerStore: Send + Sync {
    /// Read the value under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Snapshot of all entries matching `selector`, in key order.
    fn query_by_selector(&self, selector: &Selector) -> Result<Vec<StoreEntry>, StoreError>;
}

/// In-memory store with last-writer-wins semantics per key.
#[derive(Debug)]
pub struct InMemoryLedgerStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
    writable: AtomicBool,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            writable: AtomicBool::new(true),
        }
    }

    /// Simulate a store outage: while unwritable every `put` fails.
    pub fn set_writable(&self, writable: bool) {
        self.writable.store(writable, Ordering::SeqCst);
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of the full key space, for assertions.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        self.entries.read().clone()
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        if !self.writable.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                message: "store is not accepting writes".to_string(),
            });
        }
        trace!(key, bytes = value.len(), "put");
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    fn query_by_selector(&self, selector: &Selector) -> Result<Vec<StoreEntry>, StoreError> {
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|(_, value)| selector.matches(value))
            .map(|(key, value)| StoreEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = InMemoryLedgerStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_last_writer_wins() {
        let store = InMemoryLedgerStore::new();
        store.put("k", b"first".to_vec()).unwrap();
        store.put("k", b"second".to_vec()).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(b"second".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unwritable_store_rejects_puts() {
        let store = InMemoryLedgerStore::new();
        store.set_writable(false);
        assert!(matches!(
            store.put("k", b"v".to_vec()),
            Err(StoreError::WriteFailed { .. })
        ));
        assert!(store.is_empty());

        store.set_writable(true);
        assert!(store.put("k", b"v".to_vec()).is_ok());
    }

    #[test]
    fn test_selector_matches_json_fields_only() {
        let store = InMemoryLedgerStore::new();
        store
            .put("C1", br#"{"circuitId":"C1","network":"metro"}"#.to_vec())
            .unwrap();
        store
            .put("C2", br#"{"circuitId":"C2","network":"metro"}"#.to_vec())
            .unwrap();
        store.put("selftest", b"ok".to_vec()).unwrap();

        let hits = store
            .query_by_selector(&Selector::field_eq("circuitId", "C1"))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "C1");

        let metro = store
            .query_by_selector(&Selector::field_eq("network", "metro"))
            .unwrap();
        assert_eq!(metro.len(), 2);

        let none = store
            .query_by_selector(&Selector::field_eq("network", "metro").and("circuitId", "C3"))
            .unwrap();
        assert!(none.is_empty());
    }
}
