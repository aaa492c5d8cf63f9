//! Shared API state
//!
//! A `Db` is the injected store handle the handlers operate on: one migrated
//! connection behind an async mutex. Store operations are short, bounded
//! transactions, so holding the lock across one of them is cheap; test
//! isolation comes from constructing a fresh `Db` per test.

use std::path::Path;
use std::sync::Arc;

use courier_store::{db, migrations};
use rusqlite::Connection;
use tokio::sync::{Mutex, MutexGuard};

/// Handle to an opened, migrated store
#[derive(Clone)]
pub struct Db {
    conn: Arc<Mutex<Connection>>,
}

impl Db {
    /// Open (creating if needed) and migrate a file-backed store
    pub fn open<P: AsRef<Path>>(path: P) -> courier_core::Result<Self> {
        let mut conn = db::open(path)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    /// Open and migrate an in-memory store (for testing)
    pub fn in_memory() -> courier_core::Result<Self> {
        let mut conn = db::open_in_memory()?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquire the connection for one store operation
    pub async fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
