//! # vigil-watchlist — Watchlist Storage
//!
//! Validated watchlist construction, the concurrent snapshot store that
//! screening and attestation read from, YAML file ingestion, and the
//! built-in designation lists used for standalone operation.
//!
//! The store is the only stateful piece of the vigil core. Everything a
//! reader needs (entries, precomputed entity commitments, the aggregate
//! digest) is frozen into one [`WatchlistSnapshot`] so concurrent
//! reloads can never tear the view.

pub mod error;
pub mod file;
pub mod list;
pub mod seed;
pub mod store;

pub use error::WatchlistError;
pub use file::{watchlists_from_path, watchlists_from_yaml, WatchlistFile, WatchlistFileEntry};
pub use list::Watchlist;
pub use seed::{builtin_watchlists, EU_SANCTIONS, OFAC_SDN, UN_SECURITY};
pub use store::{WatchlistSnapshot, WatchlistStore};
