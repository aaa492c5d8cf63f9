//! Command repository - the dispatch queue
//!
//! Owns every state transition of a command. The deliver-once guarantee
//! lives in `claim_next`: selection and the PENDING -> EXECUTED flip happen
//! inside one write-locking transaction, with the update conditioned on the
//! row still being PENDING.

use crate::errors::{from_rusqlite, Result};
use crate::repo::from_millis;
use chrono::Utc;
use courier_core::model::{ClaimedCommand, Command, CommandState};
use courier_core::validate;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use tracing::debug;

/// SQLite repository for queued commands
pub struct CommandRepo;

impl CommandRepo {
    /// Append a PENDING command for a device
    ///
    /// `created_at` is assigned here, at insertion, never by the caller -
    /// the FIFO key must come from one clock. Returns the assigned id.
    /// There is no deduplication: the same payload enqueued twice is two
    /// independent commands.
    pub fn enqueue(conn: &Connection, device_id: &str, payload: &str) -> Result<i64> {
        validate::device_id(device_id)?;
        validate::payload(payload)?;

        let created_at = Utc::now().timestamp_millis();
        conn.execute(
            "INSERT INTO commands (device_id, payload, state, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                device_id,
                payload,
                CommandState::Pending.as_str(),
                created_at,
            ],
        )
        .map_err(|e| from_rusqlite("enqueue", e))?;

        let id = conn.last_insert_rowid();
        debug!("queued command {} for device {}", id, device_id);
        Ok(id)
    }

    /// Claim the oldest PENDING command for a device, if any
    ///
    /// Selects the smallest `(created_at, id)` PENDING row for the device,
    /// flips it to EXECUTED and returns the pre-transition snapshot. Returns
    /// `Ok(None)` when the device has no pending work - that is the expected
    /// polling result, not an error.
    ///
    /// The transaction takes the write lock up front (immediate), so two
    /// claims on the same store serialize. The update is still conditioned
    /// on `state = 'pending'` and its affected-row count is checked: if the
    /// row was taken by someone else, the loop falls through to the next
    /// oldest candidate instead of double-delivering.
    pub fn claim_next(conn: &mut Connection, device_id: &str) -> Result<Option<ClaimedCommand>> {
        validate::device_id(device_id)?;

        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| from_rusqlite("claim_next", e))?;

        let claimed = loop {
            let candidate = tx
                .query_row(
                    "SELECT id, payload, created_at FROM commands
                     WHERE device_id = ?1 AND state = 'pending'
                     ORDER BY created_at ASC, id ASC
                     LIMIT 1",
                    [device_id],
                    |row| {
                        Ok((
                            row.get::<_, i64>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, i64>(2)?,
                        ))
                    },
                )
                .optional()
                .map_err(|e| from_rusqlite("claim_next", e))?;

            let Some((id, payload, created_at)) = candidate else {
                break None;
            };

            let executed_at = Utc::now().timestamp_millis();
            let updated = tx
                .execute(
                    "UPDATE commands SET state = 'executed', executed_at = ?1
                     WHERE id = ?2 AND state = 'pending'",
                    rusqlite::params![executed_at, id],
                )
                .map_err(|e| from_rusqlite("claim_next", e))?;

            if updated == 1 {
                break Some(ClaimedCommand {
                    id,
                    payload,
                    created_at: from_millis(created_at),
                });
            }
            // Row was claimed between select and update; try the next oldest.
        };

        tx.commit().map_err(|e| from_rusqlite("claim_next", e))?;

        if let Some(command) = &claimed {
            debug!("device {} claimed command {}", device_id, command.id);
        }
        Ok(claimed)
    }

    /// Full command history for a device, newest first
    ///
    /// Includes both PENDING and EXECUTED rows. Read-only.
    pub fn list_by_device(conn: &Connection, device_id: &str) -> Result<Vec<Command>> {
        validate::device_id(device_id)?;

        let mut stmt = conn
            .prepare(
                "SELECT id, device_id, payload, state, created_at, executed_at
                 FROM commands
                 WHERE device_id = ?1
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| from_rusqlite("list_by_device", e))?;

        let commands = stmt
            .query_map([device_id], row_to_command)
            .map_err(|e| from_rusqlite("list_by_device", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_by_device", e))?;

        Ok(commands)
    }

    /// All commands across all devices, newest first
    ///
    /// Operational inspection only - device-facing logic never needs this.
    pub fn list_all(conn: &Connection) -> Result<Vec<Command>> {
        let mut stmt = conn
            .prepare(
                "SELECT id, device_id, payload, state, created_at, executed_at
                 FROM commands
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| from_rusqlite("list_all", e))?;

        let commands = stmt
            .query_map([], row_to_command)
            .map_err(|e| from_rusqlite("list_all", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("list_all", e))?;

        Ok(commands)
    }
}

fn row_to_command(row: &rusqlite::Row<'_>) -> rusqlite::Result<Command> {
    let state_text: String = row.get(3)?;
    let state = CommandState::parse(&state_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown command state '{}'", state_text).into(),
        )
    })?;

    Ok(Command {
        id: row.get(0)?,
        device_id: row.get(1)?,
        payload: row.get(2)?,
        state,
        created_at: from_millis(row.get(4)?),
        executed_at: row.get::<_, Option<i64>>(5)?.map(from_millis),
    })
}
