use thiserror::Error;

/// Result type alias using CourierError
pub type Result<T> = std::result::Result<T, CourierError>;

/// Error taxonomy for Courier operations
///
/// Every failure surfaced by the store or the boundaries is one of these
/// variants. Validation and duplicate-key errors are caller mistakes and map
/// to 4xx-equivalent responses; storage errors are engine failures and map to
/// 5xx-equivalent responses. "No pending command" and "license not found" are
/// not errors at all - they travel as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CourierError {
    // ===== Validation Errors =====
    /// Device id is empty or whitespace-only
    #[error("Invalid device id: {reason}")]
    InvalidDeviceId { reason: String },

    /// Command payload is empty or whitespace-only
    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    /// License uuid is empty or whitespace-only
    #[error("Invalid license uuid: {reason}")]
    InvalidLicenseUuid { reason: String },

    /// License number is empty or whitespace-only
    #[error("Invalid license number: {reason}")]
    InvalidLicenseNumber { reason: String },

    // ===== Constraint Errors =====
    /// A license with this uuid is already stored (uuid is write-once)
    #[error("License already exists: {uuid}")]
    DuplicateLicense { uuid: String },

    // ===== Storage Errors =====
    /// Engine-level failure from the storage layer
    #[error("Storage failure in operation '{op}': {message}")]
    Storage { op: String, message: String },
}

impl CourierError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the external contract: boundaries key their
    /// translation on the code, never on the display string.
    pub fn code(&self) -> &'static str {
        match self {
            CourierError::InvalidDeviceId { .. } => "ERR_INVALID_DEVICE_ID",
            CourierError::InvalidPayload { .. } => "ERR_INVALID_PAYLOAD",
            CourierError::InvalidLicenseUuid { .. } => "ERR_INVALID_LICENSE_UUID",
            CourierError::InvalidLicenseNumber { .. } => "ERR_INVALID_LICENSE_NUMBER",
            CourierError::DuplicateLicense { .. } => "ERR_DUPLICATE_LICENSE",
            CourierError::Storage { .. } => "ERR_STORAGE",
        }
    }

    /// Whether this error is a caller mistake (4xx-equivalent) as opposed to
    /// an engine failure (5xx-equivalent)
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, CourierError::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let cases = [
            (
                CourierError::InvalidDeviceId {
                    reason: "empty".to_string(),
                },
                "ERR_INVALID_DEVICE_ID",
            ),
            (
                CourierError::InvalidPayload {
                    reason: "empty".to_string(),
                },
                "ERR_INVALID_PAYLOAD",
            ),
            (
                CourierError::InvalidLicenseUuid {
                    reason: "empty".to_string(),
                },
                "ERR_INVALID_LICENSE_UUID",
            ),
            (
                CourierError::InvalidLicenseNumber {
                    reason: "empty".to_string(),
                },
                "ERR_INVALID_LICENSE_NUMBER",
            ),
            (
                CourierError::DuplicateLicense {
                    uuid: "abc".to_string(),
                },
                "ERR_DUPLICATE_LICENSE",
            ),
            (
                CourierError::Storage {
                    op: "enqueue".to_string(),
                    message: "disk full".to_string(),
                },
                "ERR_STORAGE",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_caller_error_split() {
        let validation = CourierError::InvalidDeviceId {
            reason: "empty".to_string(),
        };
        let duplicate = CourierError::DuplicateLicense {
            uuid: "abc".to_string(),
        };
        let storage = CourierError::Storage {
            op: "claim_next".to_string(),
            message: "database is locked".to_string(),
        };

        assert!(validation.is_caller_error());
        assert!(duplicate.is_caller_error());
        assert!(!storage.is_caller_error());
    }

    #[test]
    fn test_display_includes_context() {
        let err = CourierError::Storage {
            op: "enqueue".to_string(),
            message: "disk I/O error".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("enqueue"));
        assert!(rendered.contains("disk I/O error"));
    }
}
