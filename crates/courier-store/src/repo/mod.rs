//! Repositories over the SQLite store
//!
//! All functions take an explicit connection handle. Timestamps cross the
//! SQL boundary as integer epoch milliseconds; `DateTime<Utc>` everywhere
//! above it.

pub mod command_repo;
pub mod license_repo;

pub use command_repo::CommandRepo;
pub use license_repo::LicenseRepo;

use chrono::{DateTime, Utc};

pub(crate) fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now)
}
