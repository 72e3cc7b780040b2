//! # Screening Orchestrator
//!
//! Runs the fuzzy matcher over every entry in every loaded watchlist
//! for a query identity and applies the match policy.
//!
//! ## Security Invariant
//!
//! A row designates the subject only when the name similarity reaches
//! the high-confidence threshold AND the date of birth matches exactly.
//! When more than one row qualifies, the first in load order wins; the
//! scan does not continue looking for a higher score. Rows scoring at
//! or above the low-confidence threshold without designating are
//! surfaced as warnings for analyst review and never affect the verdict.

use serde::{Deserialize, Serialize};

use vigil_core::{
    CanonicalIdentity, EntityRecord, IdentityQuery, ListId, Timestamp, ValidationError,
};
use vigil_match::{qualifies, similarity, ScoreBand};
use vigil_watchlist::{WatchlistSnapshot, WatchlistStore};

/// Outcome of screening one identity against the loaded watchlists.
///
/// `compliant: false` means the subject was designated. `confidence` is
/// the matched row's name similarity in `[0, 1]`, or `0.0` for a clear
/// verdict. `checked_list_ids` and `checked_entry_count` describe the
/// snapshot the screening ran against, in load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningVerdict {
    /// Whether the subject cleared screening.
    pub compliant: bool,
    /// The designating row, when one qualified.
    pub matched_entity: Option<EntityRecord>,
    /// Identifier of the list containing the designating row.
    pub matched_list_id: Option<ListId>,
    /// Name similarity of the designating row in `[0, 1]`; `0.0` when clear.
    pub confidence: f64,
    /// Identifiers of every list consulted, in load order.
    pub checked_list_ids: Vec<ListId>,
    /// Total entries in the consulted snapshot.
    pub checked_entry_count: usize,
    /// When the screening ran.
    pub screened_at: Timestamp,
}

/// Screens identities against a shared [`WatchlistStore`].
#[derive(Debug, Clone)]
pub struct Screener {
    store: WatchlistStore,
}

impl Screener {
    /// Build a screener over a store handle.
    pub fn new(store: WatchlistStore) -> Self {
        Screener { store }
    }

    /// The underlying store handle.
    pub fn store(&self) -> &WatchlistStore {
        &self.store
    }

    /// Screen a raw query against the current snapshot.
    ///
    /// # Errors
    ///
    /// Fails on malformed input (empty name, reserved delimiter, bad
    /// date) before any matching runs.
    pub fn screen(&self, query: &IdentityQuery) -> Result<ScreeningVerdict, ValidationError> {
        let identity = query.canonicalize()?;
        let snapshot = self.store.snapshot();
        Ok(screen_snapshot(&identity, &snapshot))
    }
}

/// Screen an already-canonicalized identity against one snapshot.
///
/// Shared with attestation issuance so that a screening and the
/// attestation derived from it always see the same snapshot.
pub(crate) fn screen_snapshot(
    identity: &CanonicalIdentity,
    snapshot: &WatchlistSnapshot,
) -> ScreeningVerdict {
    let checked_list_ids: Vec<ListId> = snapshot.list_ids().into_iter().cloned().collect();
    let checked_entry_count = snapshot.entry_count();

    let mut designated: Option<(ListId, EntityRecord, u8)> = None;
    for (list_id, entry) in snapshot.all_entries() {
        let score = similarity(identity.name().as_str(), &entry.name);
        let birth_date_matches = identity.birth_date().as_str() == entry.date_of_birth;
        if qualifies(score, birth_date_matches) {
            tracing::info!(
                list_id = %list_id,
                program_tag = %entry.program_tag,
                score,
                "designating watchlist match"
            );
            designated = Some((list_id.clone(), entry.clone(), score));
            break;
        }
        match ScoreBand::classify(score) {
            ScoreBand::High | ScoreBand::Review => {
                tracing::warn!(
                    list_id = %list_id,
                    listed_name = %entry.name,
                    score,
                    birth_date_matches,
                    "name similarity in review range, not a designating match"
                );
            }
            ScoreBand::Clear => {}
        }
    }

    match designated {
        Some((list_id, entry, score)) => ScreeningVerdict {
            compliant: false,
            confidence: f64::from(score) / 100.0,
            matched_entity: Some(entry),
            matched_list_id: Some(list_id),
            checked_list_ids,
            checked_entry_count,
            screened_at: Timestamp::now(),
        },
        None => ScreeningVerdict {
            compliant: true,
            confidence: 0.0,
            matched_entity: None,
            matched_list_id: None,
            checked_list_ids,
            checked_entry_count,
            screened_at: Timestamp::now(),
        },
    }
}
