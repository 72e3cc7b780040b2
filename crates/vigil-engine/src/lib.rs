//! # vigil-engine — Screening and Attestation
//!
//! The operational core of the vigil stack. Wires the pure pieces
//! (`vigil-match` scoring, `vigil-crypto` commitments) to the shared
//! `vigil-watchlist` store and exposes the engine surface:
//!
//! - [`Screener::screen`] / [`AttestationEngine::screen`]: fuzzy
//!   screening of an identity against every loaded watchlist.
//! - [`AttestationEngine::issue_for`]: screen and issue a self-verifying
//!   [`Attestation`]; refused outright for designated subjects.
//! - [`AttestationEngine::verify`]: fail-closed re-verification of a
//!   presented attestation against the current watchlist state.
//! - [`AttestationEngine::issue_credential`] /
//!   [`AttestationEngine::verify_credential`]: signed, time-bounded
//!   bearer credentials via the [`CredentialSigner`] capability.
//! - [`AttestationEngine::circuit_inputs`] and
//!   [`AttestationEngine::info`]: export and introspection for external
//!   consumers.

pub mod attest;
pub mod config;
pub mod info;
pub mod screen;
pub mod signer;

pub use attest::{
    Attestation, AttestationEngine, AttestationError, VerificationOutcome, ATTESTATION_VERSION,
};
pub use config::{EngineConfig, DEFAULT_CREDENTIAL_VALIDITY_DAYS};
pub use info::{EngineInfo, WatchlistSummary};
pub use screen::{Screener, ScreeningVerdict};
pub use signer::{
    BearerCredential, CredentialClaims, CredentialSigner, Ed25519Signer, SignerError,
    SIGNING_KEY_ENV,
};
