//! Store trait: the gateway between the contract and its host ledger.
//!
//! The contract never implements storage itself. A host hands it anything
//! implementing [`Store`]; SQLite and in-memory ledgers ship with this crate.

use std::sync::Arc;

use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::scan::ScanIter;

/// The gateway trait: minimal interface to an ordered key-value ledger.
///
/// # Design Notes
///
/// - **Full replace**: `put` to an existing key replaces the whole value.
/// - **Ordering**: `scan` yields keys in byte-lexicographic order.
/// - **Bounds**: both ends of a scan are inclusive.
/// - **Atomicity**: whatever the backend guarantees for a single call. The
///   contract layers no locking or compare-and-swap on top.
pub trait Store: Send + Sync {
    /// Get the value stored at `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Write `value` at `key`, replacing any previous value.
    fn put(&self, key: &str, value: Bytes) -> Result<()>;

    /// Walk `start <= key <= end` in key order.
    ///
    /// The returned cursor is lazy; dropping it releases any backend
    /// resources it holds.
    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>>;
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        (**self).put(key, value)
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        (**self).scan(start, end)
    }
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        (**self).put(key, value)
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        (**self).scan(start, end)
    }
}

/// Reject keys a ledger cannot address.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key must not be empty".into()));
    }
    Ok(())
}
