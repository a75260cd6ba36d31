//! # Ledger Readings Store
//!
//! The store gateway: the only capability the contract engine needs from
//! its host ledger. Provides the [`Store`] trait plus SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! A ledger is an ordered map from string keys to opaque byte values. The
//! contract reads single keys, overwrites single keys, and walks bounded
//! key ranges. Anything else (durability, endorsement, consensus) belongs to
//! the host.
//!
//! ## Key Types
//!
//! - [`Store`] - The gateway trait: `get`, `put`, `scan`
//! - [`SqliteStore`] - SQLite-backed ledger
//! - [`MemoryStore`] - In-memory ledger for tests and embedding
//! - [`ScanIter`] - Lazy, forward-only range cursor
//! - [`KeyValue`] - One entry yielded by a scan
//!
//! ## Usage
//!
//! ```rust
//! use bytes::Bytes;
//! use ledger_readings_store::{MemoryStore, Store};
//!
//! let store = MemoryStore::new();
//! store.put("ASSET_0", Bytes::from_static(b"{}")).unwrap();
//! store.put("ASSET_1", Bytes::from_static(b"{}")).unwrap();
//!
//! let keys: Vec<String> = store
//!     .scan("ASSET_0", "ASSET_999")
//!     .unwrap()
//!     .map(|entry| entry.unwrap().key)
//!     .collect();
//! assert_eq!(keys, ["ASSET_0", "ASSET_1"]);
//! ```
//!
//! ## Design Notes
//!
//! - **Full replace**: `put` overwrites; there is no merge and no delete.
//! - **Inclusive ranges**: `scan(start, end)` covers `start <= key <= end` in
//!   byte-lexicographic order.
//! - **Key-set paging**: cursors fetch a page at a time after the last key
//!   seen, so no lock or statement is held between pulls and dropping the
//!   cursor is always enough to release it.

pub mod error;
pub mod memory;
pub mod migration;
pub mod scan;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use scan::{KeyValue, PageRequest, PagedScan, ScanIter};
pub use sqlite::SqliteStore;
pub use traits::{validate_key, Store};
