//! # Aggregate Digest
//!
//! The single root value committing to every entity on every loaded
//! watchlist. Computed in one pass over the hex-sorted commitment set:
//!
//! ```text
//! root = SHA-256("MERKLE_ROOT:" + join(":", sort(hex(commitments))))
//! ```
//!
//! Despite the prefix this is not a Merkle tree. There is no logarithmic
//! membership proof; verification recomputes over the entire sorted set.
//! The empty set commits to the all-zero sentinel rather than a hash, so
//! "nothing loaded" is distinguishable from any real digest.
//!
//! ## Security Invariant
//!
//! Sorting is on the lowercase hex rendering, which is stable and locale
//! independent. Load order, list boundaries, and duplicate listings of
//! the same party across lists all flow through this sort, so equal
//! commitment multisets produce equal roots and nothing else does
//! (modulo SHA-256 collisions).

use serde::{Deserialize, Serialize};
use std::fmt;

use vigil_core::{sha256_digest, Digest256};

/// Domain prefix for the aggregate digest preimage.
pub const AGGREGATE_DOMAIN: &str = "MERKLE_ROOT";

/// The root digest over all loaded entity commitments.
///
/// A thin wrapper over [`Digest256`] so signatures distinguish "some
/// commitment" from "the current root"; serializes as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregateDigest(Digest256);

impl AggregateDigest {
    /// The digest of an empty commitment set.
    pub const ZERO: AggregateDigest = AggregateDigest(Digest256::ZERO);

    /// Wrap an already-computed digest value.
    pub fn from_digest(digest: Digest256) -> Self {
        AggregateDigest(digest)
    }

    /// The underlying digest value.
    pub fn as_digest(&self) -> &Digest256 {
        &self.0
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Whether this is the empty-set sentinel.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for AggregateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the aggregate digest over a set of entity commitments.
///
/// Input order is irrelevant; the empty set yields
/// [`AggregateDigest::ZERO`].
pub fn aggregate_digest(commitments: &[Digest256]) -> AggregateDigest {
    if commitments.is_empty() {
        return AggregateDigest::ZERO;
    }
    let mut hexes: Vec<String> = commitments.iter().map(Digest256::to_hex).collect();
    hexes.sort();
    let preimage = format!("{AGGREGATE_DOMAIN}:{}", hexes.join(":"));
    AggregateDigest(sha256_digest(preimage.as_bytes()))
}
