//! Error helpers for courier-store
//!
//! All store failures surface as `CourierError`; these constructors attach
//! the failing operation name so the boundary can log something useful.

use courier_core::errors::CourierError;

/// Result type alias using CourierError
pub type Result<T> = courier_core::Result<T>;

/// Create a storage error from a rusqlite error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> CourierError {
    CourierError::Storage {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a storage error with a plain message
pub fn storage_error(op: &str, message: impl Into<String>) -> CourierError {
    CourierError::Storage {
        op: op.to_string(),
        message: message.into(),
    }
}
