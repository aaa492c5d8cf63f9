//! Migration runner
//!
//! Applies embedded migrations idempotently. Each applied migration is
//! recorded in `schema_version` together with a SHA-256 checksum of its SQL;
//! a checksum mismatch on a recorded migration means the embedded SQL was
//! edited after the fact and the store refuses to proceed.

use crate::errors::{from_rusqlite, storage_error, Result};
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};

/// Apply all pending migrations to the database
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_ledger_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version ledger table if it doesn't exist
fn create_ledger_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| from_rusqlite("migrate", e))?;

    Ok(())
}

/// Apply a single migration unless its ledger entry already exists
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = sha256_hex(sql);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| from_rusqlite("migrate", e))?;

    if let Some(recorded_checksum) = recorded {
        if recorded_checksum != checksum {
            return Err(storage_error(
                "migrate",
                format!(
                    "checksum mismatch for migration {}: recorded {}, embedded {}",
                    migration_id, recorded_checksum, checksum
                ),
            ));
        }
        // Already applied
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| from_rusqlite("migrate", e))?;

    tx.execute_batch(sql).map_err(|e| {
        storage_error(
            "migrate",
            format!("migration {} failed: {}", migration_id, e),
        )
    })?;

    let applied_at = chrono::Utc::now().timestamp_millis();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, applied_at, checksum],
    )
    .map_err(|e| from_rusqlite("migrate", e))?;

    tx.commit().map_err(|e| from_rusqlite("migrate", e))?;

    Ok(())
}

/// SHA-256 of the migration SQL, hex-encoded
fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
