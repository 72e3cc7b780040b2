//! # Watchlist Errors
//!
//! Failures while constructing or loading watchlists. Loading is
//! all-or-nothing: any error here means no store state changed.

use thiserror::Error;
use vigil_core::ValidationError;

/// Errors raised while building or ingesting watchlists.
#[derive(Debug, Error)]
pub enum WatchlistError {
    /// A list identifier failed validation.
    #[error("invalid watchlist identifier '{list_id}': {source}")]
    InvalidListId {
        /// The rejected identifier, as supplied.
        list_id: String,
        /// The underlying validation failure.
        source: ValidationError,
    },

    /// An entry inside a list failed validation.
    #[error("invalid entry at index {index} in watchlist '{list_id}': {source}")]
    InvalidEntry {
        /// Identifier of the list containing the bad entry.
        list_id: String,
        /// Zero-based position of the bad entry within the list.
        index: usize,
        /// The underlying validation failure.
        source: ValidationError,
    },

    /// Two lists in one load carried the same identifier.
    #[error("duplicate watchlist identifier '{0}'")]
    DuplicateListId(String),

    /// A watchlist file could not be read.
    #[error("failed to read watchlist file: {0}")]
    Io(#[from] std::io::Error),

    /// A watchlist file could not be parsed.
    #[error("failed to parse watchlist file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_names_list_and_position() {
        let err = WatchlistError::InvalidEntry {
            list_id: "ofac_sdn".to_string(),
            index: 3,
            source: ValidationError::EmptyFullName,
        };
        let msg = err.to_string();
        assert!(msg.contains("ofac_sdn"));
        assert!(msg.contains("index 3"));
        assert!(msg.contains("full name must not be empty"));
    }

    #[test]
    fn test_duplicate_list_id_display() {
        let err = WatchlistError::DuplicateListId("eu_sanctions".to_string());
        assert_eq!(
            err.to_string(),
            "duplicate watchlist identifier 'eu_sanctions'"
        );
    }

    #[test]
    fn test_invalid_list_id_display() {
        let err = WatchlistError::InvalidListId {
            list_id: "  ".to_string(),
            source: ValidationError::EmptyListId,
        };
        assert!(err.to_string().contains("watchlist identifier must not be empty"));
    }
}
