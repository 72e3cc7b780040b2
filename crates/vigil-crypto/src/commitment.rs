//! # Identity and Entity Commitments
//!
//! Domain-separated SHA-256 commitments over canonical delimited
//! preimages. A subject commitment binds a screened identity; an entity
//! commitment binds a watchlist row; a proof tag binds a subject
//! commitment to the aggregate digest it was screened against.
//!
//! ## Security Invariant
//!
//! Preimage layout is a compatibility contract. Independent verifiers
//! recompute these hashes from scratch, so the domain prefixes, the `:`
//! field delimiter, field order, and "absent salt renders as empty
//! string" must never change within an attestation version. Names are
//! guaranteed delimiter-free by `vigil-core` validation; dates and hex
//! digests cannot contain `:` by construction.

use vigil_core::{sha256_digest, CanonicalIdentity, Digest256, EntityRecord};

use crate::aggregate::AggregateDigest;

/// Domain prefix for subject (screened identity) commitments.
pub const SUBJECT_DOMAIN: &str = "USER";

/// Domain prefix for watchlist entity commitments.
pub const ENTITY_DOMAIN: &str = "ENTITY";

/// Domain prefix for proof tags.
pub const PROOF_DOMAIN: &str = "PROOF";

/// Commit to a canonicalized subject identity.
///
/// Preimage: `USER:{name}:{birth_date}:{address}:{wallet}:{bank}` with
/// absent salt fields rendered as empty strings, so a query with no
/// salts still commits deterministically.
pub fn commit_subject(identity: &CanonicalIdentity) -> Digest256 {
    let preimage = format!(
        "{SUBJECT_DOMAIN}:{}:{}:{}:{}:{}",
        identity.name(),
        identity.birth_date(),
        identity.address().unwrap_or(""),
        identity.wallet_reference().unwrap_or(""),
        identity.bank_reference().unwrap_or(""),
    );
    sha256_digest(preimage.as_bytes())
}

/// Commit to a watchlist entity.
///
/// Preimage: `ENTITY:{name}:{date_of_birth}`. Identity of an entity is
/// its (name, date of birth) pair; `program_tag` and `source_list_id`
/// are metadata and deliberately excluded, so the same party listed on
/// two lists produces the same commitment.
///
/// Expects a canonicalized record (uppercase name, validated date).
pub fn commit_entity(record: &EntityRecord) -> Digest256 {
    let preimage = format!("{ENTITY_DOMAIN}:{}:{}", record.name, record.date_of_birth);
    sha256_digest(preimage.as_bytes())
}

/// Derive the proof tag binding a subject to an aggregate digest.
///
/// Preimage: `PROOF:{subject_hex}:{aggregate_hex}`. Verifiers recompute
/// this from the attestation's subject commitment and the current
/// aggregate digest; any drift in either input changes the tag.
pub fn proof_tag(subject: &Digest256, aggregate: &AggregateDigest) -> Digest256 {
    let preimage = format!("{PROOF_DOMAIN}:{}:{}", subject.to_hex(), aggregate.to_hex());
    sha256_digest(preimage.as_bytes())
}
