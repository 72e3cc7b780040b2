//! # Watchlist File Ingestion
//!
//! YAML ingestion for operator-supplied watchlist sets. The file format
//! is a `watchlists` sequence of `{list_id, entries}` documents:
//!
//! ```yaml
//! watchlists:
//!   - list_id: ofac_sdn
//!     entries:
//!       - name: VLADIMIR PUTIN
//!         date_of_birth: "1952-10-07"
//!         program_tag: UKRAINE-EO13662
//! ```
//!
//! Rows are raw on disk; validation and canonicalization happen in
//! [`Watchlist::new`], so a file with one bad row is rejected as a whole
//! with the offending list and index named in the error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use vigil_core::EntityRecord;

use crate::error::WatchlistError;
use crate::list::Watchlist;

/// Top-level watchlist file document.
#[derive(Debug, Deserialize)]
pub struct WatchlistFile {
    /// The declared lists, in file order.
    pub watchlists: Vec<WatchlistFileEntry>,
}

/// One declared list inside a watchlist file.
#[derive(Debug, Deserialize)]
pub struct WatchlistFileEntry {
    /// Identifier for the list, e.g. `ofac_sdn`.
    pub list_id: String,
    /// Raw entry rows; may be omitted for an empty list.
    #[serde(default)]
    pub entries: Vec<EntityRecord>,
}

/// Parse and validate watchlists from YAML text.
pub fn watchlists_from_yaml(yaml: &str) -> Result<Vec<Watchlist>, WatchlistError> {
    let file: WatchlistFile = serde_yaml::from_str(yaml)?;
    file.watchlists
        .into_iter()
        .map(|decl| Watchlist::new(&decl.list_id, decl.entries))
        .collect()
}

/// Read, parse, and validate watchlists from a file on disk.
pub fn watchlists_from_path(path: &Path) -> Result<Vec<Watchlist>, WatchlistError> {
    let text = fs::read_to_string(path)?;
    watchlists_from_yaml(&text)
}
