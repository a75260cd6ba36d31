//! A store wrapper that fails on demand.
//!
//! `FaultyStore` forwards to an inner store until a configured fault fires.
//! It also counts live scan cursors so tests can check that every exit path
//! of an aggregation releases its cursor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bytes::Bytes;
use ledger_readings_store::{KeyValue, Result, ScanIter, Store, StoreError};

/// Faults to inject. All off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Faults {
    /// Every `get` fails.
    pub fail_get: bool,
    /// The put with this zero-based call number fails. Counts every put
    /// since the store was created.
    pub fail_put_at: Option<usize>,
    /// `scan` fails before returning a cursor.
    pub fail_scan_open: bool,
    /// The cursor yields this many entries, then an error.
    pub fail_scan_after: Option<usize>,
}

pub struct FaultyStore<S> {
    inner: S,
    faults: Mutex<Faults>,
    puts: AtomicUsize,
    open_cursors: AtomicUsize,
}

impl<S: Store> FaultyStore<S> {
    pub fn new(inner: S) -> Self {
        Self::with_faults(inner, Faults::default())
    }

    pub fn with_faults(inner: S, faults: Faults) -> Self {
        Self {
            inner,
            faults: Mutex::new(faults),
            puts: AtomicUsize::new(0),
            open_cursors: AtomicUsize::new(0),
        }
    }

    /// Replace the active faults.
    pub fn set_faults(&self, faults: Faults) -> Result<()> {
        *self.lock()? = faults;
        Ok(())
    }

    /// The wrapped store, bypassing fault injection.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Scan cursors created and not yet dropped.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Puts attempted so far, failed ones included.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Faults>> {
        self.faults
            .lock()
            .map_err(|e| StoreError::Poisoned(format!("fault config: {}", e)))
    }
}

impl<S: Store> Store for FaultyStore<S> {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        if self.lock()?.fail_get {
            return Err(StoreError::Backend(format!("injected get failure at {}", key)));
        }
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: Bytes) -> Result<()> {
        let call = self.puts.fetch_add(1, Ordering::SeqCst);
        if self.lock()?.fail_put_at == Some(call) {
            return Err(StoreError::Backend(format!("injected put failure at {}", key)));
        }
        self.inner.put(key, value)
    }

    fn scan(&self, start: &str, end: &str) -> Result<ScanIter<'_>> {
        let faults = self.lock()?.clone();
        if faults.fail_scan_open {
            return Err(StoreError::Backend("injected scan open failure".into()));
        }

        let inner = self.inner.scan(start, end)?;
        self.open_cursors.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(FaultyCursor {
            inner,
            remaining: faults.fail_scan_after,
            fused: false,
            _guard: CursorGuard(&self.open_cursors),
        }))
    }
}

struct CursorGuard<'a>(&'a AtomicUsize);

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

struct FaultyCursor<'a> {
    inner: ScanIter<'a>,
    remaining: Option<usize>,
    fused: bool,
    _guard: CursorGuard<'a>,
}

impl Iterator for FaultyCursor<'_> {
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }

        match self.remaining.as_mut() {
            Some(0) => {
                self.fused = true;
                Some(Err(StoreError::Backend("injected scan failure".into())))
            }
            Some(n) => {
                *n -= 1;
                self.inner.next()
            }
            None => self.inner.next(),
        }
    }
}
