//! # vigil-crypto — Commitment Engine
//!
//! Deterministic SHA-256 commitments for the vigil screening stack:
//! subject and entity commitments over canonical delimited preimages,
//! the single-pass aggregate digest over all loaded entity commitments,
//! and fixed-width circuit input export.
//!
//! Everything in this crate is a pure function of its inputs. All state
//! (which watchlists are loaded, which digest is current) lives in
//! `vigil-watchlist` and `vigil-engine`.

pub mod aggregate;
pub mod circuit;
pub mod commitment;

pub use aggregate::{aggregate_digest, AggregateDigest, AGGREGATE_DOMAIN};
pub use circuit::{circuit_inputs, DEFAULT_CIRCUIT_SIZE};
pub use commitment::{
    commit_entity, commit_subject, proof_tag, ENTITY_DOMAIN, PROOF_DOMAIN, SUBJECT_DOMAIN,
};
