//! # Error Hierarchy
//!
//! Validation errors shared across the vigil workspace, built with
//! `thiserror`. Subsystem crates (watchlist loading, attestation issuance,
//! credential signing) define their own error enums and wrap
//! [`ValidationError`] via `#[source]` where identity validation is the
//! root cause.
//!
//! ## Design
//!
//! Error messages echo the offending value where doing so cannot leak a
//! secret. A rejected list identifier or malformed date is operator input
//! and belongs in the message; raw digest preimages never appear.

use thiserror::Error;

/// Errors raised while validating identity fields and digest encodings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A full name was empty (or whitespace-only) after trimming.
    #[error("full name must not be empty")]
    EmptyFullName,

    /// A name contained the `:` delimiter reserved by commitment preimages.
    #[error("name '{0}' contains the reserved ':' delimiter")]
    ReservedDelimiter(String),

    /// A date of birth failed strict `YYYY-MM-DD` validation.
    #[error("invalid date of birth '{value}': {reason}")]
    InvalidBirthDate {
        /// The rejected input, as supplied.
        value: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A watchlist identifier was empty after trimming.
    #[error("watchlist identifier must not be empty")]
    EmptyListId,

    /// A digest string was not exactly 64 lowercase hex characters.
    #[error("invalid digest encoding '{0}': expected 64 lowercase hex characters")]
    InvalidDigestHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_full_name_display() {
        let err = ValidationError::EmptyFullName;
        assert_eq!(err.to_string(), "full name must not be empty");
    }

    #[test]
    fn test_reserved_delimiter_echoes_value() {
        let err = ValidationError::ReservedDelimiter("EVIL:NAME".to_string());
        assert!(err.to_string().contains("EVIL:NAME"));
        assert!(err.to_string().contains("reserved ':' delimiter"));
    }

    #[test]
    fn test_invalid_birth_date_display() {
        let err = ValidationError::InvalidBirthDate {
            value: "1990-13-40".to_string(),
            reason: "not a calendar date".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1990-13-40"));
        assert!(msg.contains("not a calendar date"));
    }

    #[test]
    fn test_invalid_digest_hex_display() {
        let err = ValidationError::InvalidDigestHex("deadbeef".to_string());
        assert!(err.to_string().contains("deadbeef"));
        assert!(err.to_string().contains("64 lowercase hex"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(ValidationError::EmptyListId, ValidationError::EmptyListId);
        assert_ne!(
            ValidationError::EmptyFullName,
            ValidationError::EmptyListId
        );
    }
}
