use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License - a write-once uuid to license-number mapping
///
/// Shares the storage engine with the command queue but has no relationship
/// to it: no lifecycle beyond creation, read by exact-match lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// Unique identifier, assigned at creation
    pub id: i64,

    /// Opaque lookup key; unique across the table
    pub uuid: String,

    /// The license string resolved by the lookup
    pub license_number: String,

    /// Timestamp assigned by the store at insertion
    pub created_at: DateTime<Utc>,
}
