//! # Digest Primitives
//!
//! SHA-256 computation and the [`Digest256`] value type. Every commitment
//! in the stack (subject commitments, entity commitments, aggregate
//! digests, proof tags) is a `Digest256` produced by [`sha256_digest`].
//!
//! ## Security Invariant
//!
//! The lowercase hex rendering of a digest is a wire format AND a sort
//! key: aggregate digests are computed over hex-sorted commitment lists.
//! [`Digest256::to_hex`] must therefore stay fixed-width, lowercase, and
//! locale-independent. Because hex encoding is byte-monotone, the derived
//! `Ord` on raw bytes sorts identically to sorting the hex strings.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::ValidationError;

/// Compute the SHA-256 digest of `data` as raw bytes.
pub fn sha256_raw(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the SHA-256 digest of `data` as a [`Digest256`].
pub fn sha256_digest(data: &[u8]) -> Digest256 {
    Digest256::from_bytes(sha256_raw(data))
}

/// A 32-byte digest value.
///
/// Serializes as a 64-character lowercase hex string. The all-zero digest
/// ([`Digest256::ZERO`]) is the sentinel for "nothing committed": it is
/// the aggregate digest of an empty commitment set and the padding value
/// for fixed-size circuit input vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest256([u8; 32]);

impl Digest256 {
    /// The all-zero digest.
    pub const ZERO: Digest256 = Digest256([0u8; 32]);

    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest256(bytes)
    }

    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from its canonical hex form.
    ///
    /// Strict by construction: exactly 64 characters, lowercase `0-9a-f`
    /// only. Anything else is rejected so that re-encoding always
    /// reproduces the input byte-for-byte.
    pub fn from_hex(s: &str) -> Result<Self, ValidationError> {
        if s.len() != 64 || !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)) {
            return Err(ValidationError::InvalidDigestHex(s.to_string()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_nibble(chunk[0]);
            let lo = hex_nibble(chunk[1]);
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Digest256(bytes))
    }

    /// Whether this is the all-zero sentinel digest.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

fn hex_nibble(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        // from_hex validates the alphabet before decoding
        _ => unreachable!("hex alphabet checked prior to decode"),
    }
}

impl fmt::Display for Digest256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest256::from_hex(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sha256_empty_input_known_vector() {
        assert_eq!(
            sha256_digest(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc_known_vector() {
        assert_eq!(
            sha256_digest(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_zero_digest_is_64_zeros() {
        assert_eq!(Digest256::ZERO.to_hex(), "0".repeat(64));
        assert!(Digest256::ZERO.is_zero());
        assert!(!sha256_digest(b"x").is_zero());
    }

    #[test]
    fn test_hex_round_trip() {
        let d = sha256_digest(b"round trip");
        let parsed = Digest256::from_hex(&d.to_hex()).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(Digest256::from_hex("abcd").is_err());
        assert!(Digest256::from_hex(&"a".repeat(63)).is_err());
        assert!(Digest256::from_hex(&"a".repeat(65)).is_err());
        assert!(Digest256::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_uppercase_and_non_hex() {
        let upper = "A".repeat(64);
        assert!(Digest256::from_hex(&upper).is_err());
        let non_hex = "g".repeat(64);
        assert!(Digest256::from_hex(&non_hex).is_err());
    }

    #[test]
    fn test_display_matches_to_hex() {
        let d = sha256_digest(b"display");
        assert_eq!(format!("{d}"), d.to_hex());
    }

    #[test]
    fn test_serde_round_trip_as_hex_string() {
        let d = sha256_digest(b"serde");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{}\"", d.to_hex()));
        let back: Digest256 = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }

    #[test]
    fn test_serde_rejects_malformed_hex() {
        let result: Result<Digest256, _> = serde_json::from_str("\"not-a-digest\"");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(bytes in prop::array::uniform32(any::<u8>())) {
            let d = Digest256::from_bytes(bytes);
            let parsed = Digest256::from_hex(&d.to_hex()).unwrap();
            prop_assert_eq!(d, parsed);
        }

        #[test]
        fn prop_byte_order_matches_hex_order(
            a in prop::array::uniform32(any::<u8>()),
            b in prop::array::uniform32(any::<u8>()),
        ) {
            let da = Digest256::from_bytes(a);
            let db = Digest256::from_bytes(b);
            prop_assert_eq!(da.cmp(&db), da.to_hex().cmp(&db.to_hex()));
        }
    }
}
