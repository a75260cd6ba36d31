//! Range-scan cursors.
//!
//! A scan is a lazy, forward-only walk over `start <= key <= end`. Backends
//! implement it with [`PagedScan`]: the cursor asks the backend for at most
//! `page_size` entries strictly after the last key it has yielded, so the
//! backend only holds its lock for the duration of one page fetch. Dropping
//! the cursor releases it, whichever way iteration ended.

use std::collections::VecDeque;

use bytes::Bytes;

use crate::error::Result;

/// One entry yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Bytes,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A lazy range cursor returned by [`Store::scan`](crate::Store::scan).
///
/// Items arrive in ascending key order. After the first `Err` the cursor
/// yields nothing more.
pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<KeyValue>> + 'a>;

/// Bounds for one page fetch.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    /// Last key already yielded; the page starts strictly after it.
    /// `None` for the first page, which starts at `start` inclusive.
    pub after: Option<&'a str>,
    pub start: &'a str,
    /// Inclusive upper bound.
    pub end: &'a str,
    pub limit: usize,
}

/// Key-set paginated cursor over a backend fetch function.
pub struct PagedScan<F> {
    fetch: F,
    start: String,
    end: String,
    last_key: Option<String>,
    page: VecDeque<KeyValue>,
    page_size: usize,
    done: bool,
}

impl<F> PagedScan<F>
where
    F: FnMut(PageRequest<'_>) -> Result<Vec<KeyValue>>,
{
    /// Create a cursor over `start..=end`. A `start` above `end` is an empty scan.
    pub fn new(start: impl Into<String>, end: impl Into<String>, page_size: usize, fetch: F) -> Self {
        let start = start.into();
        let end = end.into();
        let done = start > end;

        Self {
            fetch,
            start,
            end,
            last_key: None,
            page: VecDeque::new(),
            page_size: page_size.max(1),
            done,
        }
    }

    fn refill(&mut self) -> Result<()> {
        if let Some(last) = self.last_key.as_deref() {
            if last >= self.end.as_str() {
                self.done = true;
                return Ok(());
            }
        }

        let request = PageRequest {
            after: self.last_key.as_deref(),
            start: &self.start,
            end: &self.end,
            limit: self.page_size,
        };
        let page = (self.fetch)(request)?;

        tracing::trace!(
            start = %self.start,
            end = %self.end,
            after = ?self.last_key,
            fetched = page.len(),
            "scan page fetched"
        );

        if page.len() < self.page_size {
            self.done = true;
        }
        if let Some(last) = page.last() {
            self.last_key = Some(last.key.clone());
        }
        self.page.extend(page);

        Ok(())
    }
}

impl<F> Iterator for PagedScan<F>
where
    F: FnMut(PageRequest<'_>) -> Result<Vec<KeyValue>>,
{
    type Item = Result<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.page.pop_front() {
            return Some(Ok(entry));
        }
        if self.done {
            return None;
        }

        if let Err(e) = self.refill() {
            self.done = true;
            return Some(Err(e));
        }

        self.page.pop_front().map(Ok)
    }
}

impl<F> Drop for PagedScan<F> {
    fn drop(&mut self) {
        tracing::trace!(
            start = %self.start,
            end = %self.end,
            exhausted = self.done && self.page.is_empty(),
            "scan cursor released"
        );
    }
}
