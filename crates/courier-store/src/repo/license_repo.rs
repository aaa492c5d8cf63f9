//! License repository
//!
//! Write-once uuid -> license-number lookup. Shares the engine with the
//! command queue and nothing else.

use crate::errors::{from_rusqlite, Result};
use crate::repo::from_millis;
use chrono::Utc;
use courier_core::errors::CourierError;
use courier_core::model::License;
use courier_core::validate;
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

/// SQLite repository for licenses
pub struct LicenseRepo;

impl LicenseRepo {
    /// Store a license under a new uuid
    ///
    /// Fails with `DuplicateLicense` if the uuid is already present; the
    /// stored record is unchanged in that case.
    pub fn add(conn: &Connection, uuid: &str, license_number: &str) -> Result<i64> {
        validate::license_uuid(uuid)?;
        validate::license_number(license_number)?;

        let created_at = Utc::now().timestamp_millis();
        let result = conn.execute(
            "INSERT INTO licenses (uuid, license_number, created_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![uuid, license_number, created_at],
        );

        match result {
            Ok(_) => {
                let id = conn.last_insert_rowid();
                debug!("stored license {} under uuid {}", id, uuid);
                Ok(id)
            }
            Err(err) if is_unique_violation(&err) => Err(CourierError::DuplicateLicense {
                uuid: uuid.to_string(),
            }),
            Err(err) => Err(from_rusqlite("add_license", err)),
        }
    }

    /// Look up a license by exact uuid match
    ///
    /// `Ok(None)` when the uuid is unknown - not an error.
    pub fn get_by_uuid(conn: &Connection, uuid: &str) -> Result<Option<License>> {
        validate::license_uuid(uuid)?;

        let license = conn
            .query_row(
                "SELECT id, uuid, license_number, created_at
                 FROM licenses
                 WHERE uuid = ?1",
                [uuid],
                row_to_license,
            )
            .optional()
            .map_err(|e| from_rusqlite("get_license", e))?;

        Ok(license)
    }

    /// All licenses, newest first (operational inspection)
    pub fn list_all(conn: &Connection) -> Result<Vec<License>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, uuid, license_number, created_at
                 FROM licenses
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| from_rusqlite("list_licenses", e))?;

        let licenses = stmt
            .query_map([], row_to_license)
            .map_err(|e| from_rusqlite("list_licenses", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_licenses", e))?;

        Ok(licenses)
    }
}

fn row_to_license(row: &rusqlite::Row<'_>) -> rusqlite::Result<License> {
    Ok(License {
        id: row.get(0)?,
        uuid: row.get(1)?,
        license_number: row.get(2)?,
        created_at: from_millis(row.get(3)?),
    })
}

/// SQLITE_CONSTRAINT_UNIQUE from the uuid uniqueness constraint
fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
