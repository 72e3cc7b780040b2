//! # Watchlist Store
//!
//! Shared, read-mostly storage for the loaded watchlist set. Readers
//! take an immutable [`WatchlistSnapshot`] handle and never observe a
//! partially-applied reload; reloads build a complete new snapshot off
//! the lock, then swap it in under a short exclusive section.
//!
//! ## Security Invariant
//!
//! The aggregate digest and the entry set it commits to are frozen
//! together inside one snapshot. Screening, attestation issuance, and
//! verification against a snapshot therefore always see mutually
//! consistent (entries, commitments, digest) state, even while a reload
//! runs concurrently. A failed reload leaves the prior snapshot active.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use vigil_core::{Digest256, EntityRecord, ListId, Timestamp};
use vigil_crypto::{aggregate_digest, commit_entity, AggregateDigest};

use crate::error::WatchlistError;
use crate::list::Watchlist;

/// An immutable view of the watchlist set at one load instant.
#[derive(Debug)]
pub struct WatchlistSnapshot {
    lists: Vec<Watchlist>,
    entry_count: usize,
    /// Entity commitments in canonical (hex) order.
    commitments: Vec<Digest256>,
    digest: AggregateDigest,
    loaded_at: Timestamp,
}

impl WatchlistSnapshot {
    /// Build a snapshot from validated lists, precomputing commitments
    /// and the aggregate digest.
    pub fn build(lists: Vec<Watchlist>) -> Result<Self, WatchlistError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for list in &lists {
            if !seen.insert(list.id().as_str()) {
                return Err(WatchlistError::DuplicateListId(
                    list.id().as_str().to_string(),
                ));
            }
        }
        let mut commitments: Vec<Digest256> = lists
            .iter()
            .flat_map(|list| list.entries().iter().map(commit_entity))
            .collect();
        commitments.sort();
        let digest = aggregate_digest(&commitments);
        let entry_count = lists.iter().map(Watchlist::len).sum();
        Ok(WatchlistSnapshot {
            lists,
            entry_count,
            commitments,
            digest,
            loaded_at: Timestamp::now(),
        })
    }

    /// A snapshot with no lists and the zero aggregate digest.
    pub fn empty() -> Self {
        WatchlistSnapshot {
            lists: Vec::new(),
            entry_count: 0,
            commitments: Vec::new(),
            digest: AggregateDigest::ZERO,
            loaded_at: Timestamp::now(),
        }
    }

    /// The loaded lists, in load order.
    pub fn lists(&self) -> &[Watchlist] {
        &self.lists
    }

    /// List identifiers, in load order.
    pub fn list_ids(&self) -> Vec<&ListId> {
        self.lists.iter().map(Watchlist::id).collect()
    }

    /// Iterate every `(list_id, entry)` pair in load order.
    pub fn all_entries(&self) -> impl Iterator<Item = (&ListId, &EntityRecord)> {
        self.lists
            .iter()
            .flat_map(|list| list.entries().iter().map(move |e| (list.id(), e)))
    }

    /// Total entry count across all lists.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// The aggregate digest over all entity commitments.
    pub fn aggregate_digest(&self) -> &AggregateDigest {
        &self.digest
    }

    /// Entity commitments in canonical (hex) order.
    pub fn entity_commitments(&self) -> &[Digest256] {
        &self.commitments
    }

    /// When this snapshot was built.
    pub fn loaded_at(&self) -> Timestamp {
        self.loaded_at
    }
}

/// Handle to the current watchlist snapshot, shareable across threads.
#[derive(Debug)]
pub struct WatchlistStore {
    current: Arc<RwLock<Arc<WatchlistSnapshot>>>,
}

impl WatchlistStore {
    /// An empty store (zero aggregate digest, no entries).
    pub fn new() -> Self {
        WatchlistStore {
            current: Arc::new(RwLock::new(Arc::new(WatchlistSnapshot::empty()))),
        }
    }

    /// A store preloaded with the given lists.
    pub fn with_lists(lists: Vec<Watchlist>) -> Result<Self, WatchlistError> {
        let snapshot = WatchlistSnapshot::build(lists)?;
        Ok(WatchlistStore {
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        })
    }

    /// Replace the entire watchlist set atomically.
    ///
    /// The new snapshot (including its aggregate digest) is built before
    /// the lock is taken; on any error the store is untouched and the
    /// prior snapshot stays active.
    pub fn reload(&self, lists: Vec<Watchlist>) -> Result<(), WatchlistError> {
        let snapshot = Arc::new(WatchlistSnapshot::build(lists)?);
        tracing::info!(
            list_count = snapshot.lists().len(),
            entry_count = snapshot.entry_count(),
            aggregate_digest = %snapshot.aggregate_digest(),
            "watchlist store reloaded"
        );
        *self.current.write() = snapshot;
        Ok(())
    }

    /// The current snapshot. Cheap (one Arc clone); the returned handle
    /// stays valid across concurrent reloads.
    pub fn snapshot(&self) -> Arc<WatchlistSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Convenience: the current aggregate digest.
    pub fn aggregate_digest(&self) -> AggregateDigest {
        *self.snapshot().aggregate_digest()
    }

    /// Convenience: the current total entry count.
    pub fn entry_count(&self) -> usize {
        self.snapshot().entry_count()
    }
}

impl Clone for WatchlistStore {
    fn clone(&self) -> Self {
        WatchlistStore {
            current: Arc::clone(&self.current),
        }
    }
}

impl Default for WatchlistStore {
    fn default() -> Self {
        WatchlistStore::new()
    }
}
