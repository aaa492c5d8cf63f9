//! Database connection management
//!
//! Opens and configures SQLite connections. Repositories never open
//! connections themselves - callers pass handles in, so tests can point
//! every operation at an in-memory or temp-file store.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a connection waits on the write lock before giving up.
/// Claim transactions take the lock eagerly, so concurrent claimers queue
/// here rather than failing immediately.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite database at the given path, configured
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(|e| from_rusqlite("open", e))?;
    configure(&conn)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing), configured
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| from_rusqlite("open_in_memory", e))?;
    configure(&conn)?;
    Ok(conn)
}

/// Apply connection settings
///
/// WAL keeps readers unblocked while a claim holds the write lock; the busy
/// timeout bounds how long a queued claimer waits for it.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| from_rusqlite("configure", e))?;

    // journal_mode is a no-op (reports "memory") on in-memory databases
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| from_rusqlite("configure", e))?;

    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(|e| from_rusqlite("configure", e))?;

    Ok(())
}
