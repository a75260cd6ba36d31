//! In-memory implementation of the Store trait.
//!
//! This is primarily for testing and for embedding the contract in a host
//! that keeps its own state. It has the same semantics as SQLite but keeps
//! everything in memory with no persistence.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::scan::{KeyValue, PageRequest, PagedScan, ScanIter};
use crate::traits::{validate_key, Store};

const DEFAULT_PAGE_SIZE: usize = 64;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Bytes>>,
    page_size: usize,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set how many entries a scan cursor pulls per lock acquisition.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    /// All keys, in order.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read()?.keys().cloned().collect())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Bytes>>> {
        self.entries
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Bytes>>> {
        self.entries
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn fetch_page(&self, req: PageRequest<'_>) -> Result<Vec<KeyValue>> {
        let lower = match req.after {
            Some(after) => Bound::Excluded(after),
            None => Bound::Included(req.start),
        };

        let entries = self.read()?;
        Ok(entries
            .range::<str, _>((lower, Bound::Included(req.end)))
            .take(req.limit)
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        validate_key(key)?;
        Ok(self.read()?.get(key).cloned())
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        validate_key(key)?;
        self.write()?.insert(key.to_string(), value);
        Ok(())
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        Ok(Box::new(PagedScan::new(
            start,
            end,
            self.page_size,
            move |req: PageRequest<'_>| self.fetch_page(req),
        )))
    }
}
