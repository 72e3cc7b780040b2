//! # Engine Introspection
//!
//! A serializable status report for operator tooling: which lists are
//! loaded, the current aggregate digest, and the active policy and
//! configuration values.

use serde::{Deserialize, Serialize};

use vigil_core::{ListId, Timestamp};
use vigil_crypto::AggregateDigest;
use vigil_match::{HIGH_CONFIDENCE, LOW_CONFIDENCE};

use crate::attest::AttestationEngine;

/// Per-list summary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistSummary {
    /// The list identifier.
    pub list_id: ListId,
    /// Number of entries on the list.
    pub entry_count: usize,
}

/// Snapshot of engine state and policy for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    /// Engine crate version.
    pub version: String,
    /// Loaded lists, in load order.
    pub watchlists: Vec<WatchlistSummary>,
    /// Total entries across all lists.
    pub total_entries: usize,
    /// Aggregate digest of the current watchlist state.
    pub aggregate_digest: AggregateDigest,
    /// Configured circuit input width.
    pub circuit_size: usize,
    /// Configured bearer credential lifetime in days.
    pub credential_validity_days: i64,
    /// Designating similarity threshold.
    pub high_confidence_threshold: u8,
    /// Review-band similarity threshold.
    pub low_confidence_threshold: u8,
    /// When the current watchlist snapshot was loaded.
    pub loaded_at: Timestamp,
}

impl AttestationEngine {
    /// Collect the current engine status.
    pub fn info(&self) -> EngineInfo {
        let snapshot = self.store().snapshot();
        EngineInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
            watchlists: snapshot
                .lists()
                .iter()
                .map(|list| WatchlistSummary {
                    list_id: list.id().clone(),
                    entry_count: list.len(),
                })
                .collect(),
            total_entries: snapshot.entry_count(),
            aggregate_digest: *snapshot.aggregate_digest(),
            circuit_size: self.config().circuit_size,
            credential_validity_days: self.config().credential_validity_days,
            high_confidence_threshold: HIGH_CONFIDENCE,
            low_confidence_threshold: LOW_CONFIDENCE,
            loaded_at: snapshot.loaded_at(),
        }
    }
}
