//! # Validated Watchlists
//!
//! A [`Watchlist`] is a named, ordered collection of canonicalized
//! [`EntityRecord`]s. Construction validates every entry up front, so
//! downstream matching and commitment code never re-checks fields.

use vigil_core::{EntityRecord, ListId};

use crate::error::WatchlistError;

/// A named, ordered collection of designated parties.
///
/// Entry order is preserved as loaded: screening iterates it directly
/// and the first qualifying entry wins. Aggregate digest computation
/// sorts elsewhere and does not depend on this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    id: ListId,
    entries: Vec<EntityRecord>,
}

impl Watchlist {
    /// Validate an identifier and a batch of raw entries into a list.
    ///
    /// Every entry is canonicalized (uppercase trimmed name, strict
    /// date) and stamped with this list's identifier. The first invalid
    /// entry aborts construction with its position in the error.
    pub fn new(list_id: &str, entries: Vec<EntityRecord>) -> Result<Self, WatchlistError> {
        let id = ListId::new(list_id).map_err(|source| WatchlistError::InvalidListId {
            list_id: list_id.to_string(),
            source,
        })?;
        let mut canonical = Vec::with_capacity(entries.len());
        for (index, raw) in entries.iter().enumerate() {
            let record =
                raw.canonicalize(&id)
                    .map_err(|source| WatchlistError::InvalidEntry {
                        list_id: id.as_str().to_string(),
                        index,
                        source,
                    })?;
            canonical.push(record);
        }
        Ok(Watchlist {
            id,
            entries: canonical,
        })
    }

    /// This list's identifier.
    pub fn id(&self) -> &ListId {
        &self.id
    }

    /// The canonicalized entries, in load order.
    pub fn entries(&self) -> &[EntityRecord] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
