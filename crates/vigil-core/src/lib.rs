#![deny(missing_docs)]

//! # vigil-core — Foundational Screening Types
//!
//! Shared primitives for the vigil watchlist screening stack. Everything
//! here is deliberately small and dependency-light; the heavier crates
//! (matching, commitments, watchlist storage, the attestation engine)
//! build on these types.
//!
//! ## Design Principles
//!
//! - **Validate at the boundary.** [`CanonicalName`], [`BirthDate`], and
//!   [`ListId`] cannot be constructed in non-canonical form. Downstream
//!   code takes these types and skips re-validation.
//! - **Deterministic wire forms.** [`Digest256`] serializes as lowercase
//!   hex and [`Timestamp`] as second-precision RFC 3339. Anything that
//!   gets hashed or signed must re-serialize byte-for-byte.
//! - **Errors are data.** [`ValidationError`] is a `thiserror` enum with
//!   messages that name the offending value, not a stringly-typed bag.

pub mod digest;
pub mod error;
pub mod identity;
pub mod temporal;

pub use digest::{sha256_digest, sha256_raw, Digest256};
pub use error::ValidationError;
pub use identity::{
    BirthDate, CanonicalIdentity, CanonicalName, EntityRecord, IdentityQuery, ListId,
};
pub use temporal::Timestamp;
