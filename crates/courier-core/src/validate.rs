//! Input validation rules
//!
//! Shared by every boundary: the store validates before writing, so no
//! surface can slip an empty identifier or payload past the queue.

use crate::errors::{CourierError, Result};

/// Validate a device identifier: non-empty after trimming
pub fn device_id(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourierError::InvalidDeviceId {
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate a command payload: non-empty after trimming
pub fn payload(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourierError::InvalidPayload {
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate a license uuid: non-empty after trimming
pub fn license_uuid(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourierError::InvalidLicenseUuid {
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate a license number: non-empty after trimming
pub fn license_number(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CourierError::InvalidLicenseNumber {
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_id_rejects_empty_and_whitespace() {
        assert!(device_id("").is_err());
        assert!(device_id("   ").is_err());
        assert!(device_id("\t\n").is_err());
        assert!(device_id("device-001").is_ok());
    }

    #[test]
    fn test_payload_rejects_empty_and_whitespace() {
        assert!(payload("").is_err());
        assert!(payload("  ").is_err());
        assert!(payload("reboot").is_ok());
    }

    #[test]
    fn test_license_fields_reject_empty() {
        assert!(license_uuid("").is_err());
        assert!(license_number(" ").is_err());
        assert!(license_uuid("5f0c3a1e").is_ok());
        assert!(license_number("LIC-2024-0001").is_ok());
    }

    #[test]
    fn test_error_codes_match_fields() {
        let err = device_id("").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_DEVICE_ID");
        let err = payload("").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_PAYLOAD");
        let err = license_uuid("").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_LICENSE_UUID");
        let err = license_number("").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_LICENSE_NUMBER");
    }
}
