//! SQLite implementation of the Store trait.
//!
//! A durable ledger for hosts that do not bring their own. Uses rusqlite
//! with bundled SQLite; the connection sits behind a mutex and every call
//! runs on the caller's thread.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use bytes::Bytes;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreError};
use crate::migration::{self, now_millis};
use crate::scan::{KeyValue, PageRequest, PagedScan, ScanIter};
use crate::traits::{validate_key, Store};

const DEFAULT_PAGE_SIZE: usize = 256;

const SCAN_FROM: &str = "SELECT key, value FROM ledger_state
     WHERE key >= ?1 AND key <= ?2
     ORDER BY key LIMIT ?3";

const SCAN_AFTER: &str = "SELECT key, value FROM ledger_state
     WHERE key > ?1 AND key <= ?2
     ORDER BY key LIMIT ?3";

/// SQLite-based store implementation.
///
/// Thread-safe via internal Mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    page_size: usize,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file (and missing parent directories) and sets up the
    /// ledger schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        migration::migrate(&conn)?;
        tracing::debug!(path = %path.display(), "opened sqlite ledger");

        Ok(Self {
            conn: Mutex::new(conn),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migration::migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Set how many rows a scan cursor fetches per query.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Poisoned(format!("sqlite connection: {}", e)))
    }

    /// Execute a blocking operation on the connection.
    fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    fn fetch_page(&self, req: PageRequest<'_>) -> Result<Vec<KeyValue>> {
        let (sql, lower) = match req.after {
            Some(after) => (SCAN_AFTER, after),
            None => (SCAN_FROM, req.start),
        };
        let limit = i64::try_from(req.limit).unwrap_or(i64::MAX);

        self.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params![lower, req.end, limit], |row| {
                    let key: String = row.get(0)?;
                    let value: Vec<u8> = row.get(1)?;
                    Ok(KeyValue::new(key, value))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        validate_key(key)?;

        self.with_conn(|conn| {
            let value: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT value FROM ledger_state WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value.map(Bytes::from))
        })
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        validate_key(key)?;

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO ledger_state (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value.as_ref(), now_millis()],
            )?;
            Ok(())
        })
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
