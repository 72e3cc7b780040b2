//! # Circuit Input Export
//!
//! Fixed-size commitment vectors for downstream proving systems that
//! require a constant input width. The live commitment set is sorted,
//! padded to the configured width with the zero sentinel, and truncated
//! if it somehow exceeds the width.

use vigil_core::Digest256;

/// Default circuit input width.
pub const DEFAULT_CIRCUIT_SIZE: usize = 1000;

/// Export commitments as a fixed-width, sorted, zero-padded vector.
///
/// Sorting matches the aggregate digest ordering (lowercase hex), so a
/// consumer sees the same canonical sequence the root was computed over.
pub fn circuit_inputs(commitments: &[Digest256], size: usize) -> Vec<Digest256> {
    let mut inputs = commitments.to_vec();
    // Byte order and lowercase-hex order coincide for fixed-width digests.
    inputs.sort();
    inputs.truncate(size);
    inputs.resize(size, Digest256::ZERO);
    inputs
}
