//! Ledger schema setup for SQLite.
//!
//! The schema version lives in SQLite's `user_version` pragma. There is one
//! layout so far: a single `ledger_state` table keyed by ledger key.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Schema version written by this build.
pub const CURRENT_VERSION: u32 = 1;

const LEDGER_STATE: &str = "
    CREATE TABLE IF NOT EXISTS ledger_state (
        key TEXT PRIMARY KEY NOT NULL,
        value BLOB NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// Create the ledger table if needed and stamp the schema version.
///
/// Refuses a file stamped by a newer build. Safe to call on every open.
pub fn migrate(conn: &Connection) -> Result<()> {
    let found: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if found > CURRENT_VERSION {
        return Err(StoreError::Migration(format!(
            "ledger file has schema version {}, this build reads up to {}",
            found, CURRENT_VERSION
        )));
    }

    conn.execute_batch(LEDGER_STATE)?;
    if found < CURRENT_VERSION {
        conn.pragma_update(None, "user_version", CURRENT_VERSION)?;
        tracing::debug!(from = found, to = CURRENT_VERSION, "ledger schema stamped");
    }

    Ok(())
}

/// Wall-clock Unix milliseconds for `updated_at`. Zero if the clock reads
/// before the epoch.
pub(crate) fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|elapsed| i64::try_from(elapsed.as_millis()).ok())
        .unwrap_or(0)
}
