//! # Credential Signing
//!
//! Bearer credentials wrap an attestation's claims in a signed,
//! time-bounded bundle a subject can present without contacting the
//! screening service. The signature scheme sits behind the
//! [`CredentialSigner`] capability so deployments can swap key
//! management without touching the engine; [`Ed25519Signer`] is the
//! built-in implementation.
//!
//! ## Security Invariant
//!
//! `verify` distinguishes "cryptographically invalid" from "malformed
//! input": a well-formed signature that does not check out is
//! `Ok(false)`, while undecodable key or signature material is an error.
//! Callers must treat both as rejection; the split exists only so
//! operators can tell tampering from corruption.
//!
//! Signatures cover the exact serialized claims bytes. Claims
//! serialization is deterministic (fixed field order, second-precision
//! timestamps, lowercase hex digests), so re-serialization at
//! verification time reproduces the signed payload byte-for-byte.

use ed25519_dalek::{Signature, Signer as _, SigningKey};
use rand_core::OsRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use vigil_core::{Digest256, Timestamp};
use vigil_crypto::AggregateDigest;

use crate::attest::{Attestation, AttestationEngine};

/// Environment variable holding the hex-encoded Ed25519 signing key.
pub const SIGNING_KEY_ENV: &str = "VIGIL_SIGNING_KEY_HEX";

/// Failures in credential signing and verification.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Key material could not be decoded.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    /// Signature bytes could not be decoded. Distinct from a signature
    /// that decodes but fails verification, which is `Ok(false)`.
    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    /// Claims could not be serialized for signing.
    #[error("failed to encode credential claims: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Capability that signs and verifies credential payloads.
///
/// `verify` returns `Ok(false)` for a well-formed signature that fails
/// cryptographic verification and `Err` only for malformed input.
pub trait CredentialSigner: Send + Sync {
    /// Stable identifier for this signer, embedded in issued claims.
    fn issuer(&self) -> String;

    /// Sign a payload, returning raw signature bytes.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// Check a signature over a payload.
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool, SignerError>;
}

/// Ed25519 credential signer.
pub struct Ed25519Signer {
    key: SigningKey,
}

impl Ed25519Signer {
    /// Generate a fresh random signing key.
    pub fn generate() -> Self {
        Ed25519Signer {
            key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a signer from raw key bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Ed25519Signer {
            key: SigningKey::from_bytes(bytes),
        }
    }

    /// Build a signer from a 64-character hex key.
    pub fn from_hex(hex: &str) -> Result<Self, SignerError> {
        let decoded = Zeroizing::new(
            decode_hex(hex.trim()).ok_or_else(|| {
                SignerError::InvalidKey("expected 64 hex characters".to_string())
            })?,
        );
        if decoded.len() != 32 {
            return Err(SignerError::InvalidKey(
                "expected 64 hex characters".to_string(),
            ));
        }
        let mut bytes = Zeroizing::new([0u8; 32]);
        bytes.copy_from_slice(&decoded);
        Ok(Ed25519Signer::from_bytes(&bytes))
    }

    /// Load the signing key from [`SIGNING_KEY_ENV`], generating an
    /// ephemeral key (with a warning) when unset or unusable.
    /// Credentials signed with an ephemeral key stop verifying at
    /// process restart.
    pub fn from_environment() -> Self {
        match std::env::var(SIGNING_KEY_ENV) {
            Ok(raw) => match Ed25519Signer::from_hex(&raw) {
                Ok(signer) => signer,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "{SIGNING_KEY_ENV} is unusable, generating ephemeral signing key"
                    );
                    Ed25519Signer::generate()
                }
            },
            Err(_) => {
                tracing::warn!(
                    "{SIGNING_KEY_ENV} not set, generating ephemeral signing key; \
                     credentials will not verify across restarts"
                );
                Ed25519Signer::generate()
            }
        }
    }

    /// Hex encoding of the public verifying key.
    pub fn verifying_key_hex(&self) -> String {
        encode_hex(self.key.verifying_key().as_bytes())
    }
}

impl CredentialSigner for Ed25519Signer {
    fn issuer(&self) -> String {
        format!("vigil:ed25519:{}", self.verifying_key_hex())
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SignerError> {
        Ok(self.key.sign(payload).to_bytes().to_vec())
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<bool, SignerError> {
        let signature = Signature::from_slice(signature)
            .map_err(|e| SignerError::MalformedSignature(e.to_string()))?;
        Ok(self
            .key
            .verifying_key()
            .verify_strict(payload, &signature)
            .is_ok())
    }
}

/// The signed content of a bearer credential.
///
/// Field order is part of the signing contract; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaims {
    /// Identifier of the signing party.
    pub issuer: String,
    /// Commitment to the screened identity.
    pub subject_commitment: Digest256,
    /// Aggregate digest of the watchlist state at issuance.
    pub aggregate_digest: AggregateDigest,
    /// Screening outcome carried from the attestation.
    pub compliant: bool,
    /// Issuance time.
    pub issued_at: Timestamp,
    /// Expiry; the credential stops verifying after this instant.
    pub expires_at: Timestamp,
}

impl CredentialClaims {
    /// The exact bytes covered by the credential signature.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, SignerError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// A signed, time-bounded credential a subject can present offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerCredential {
    /// The signed claims.
    pub claims: CredentialClaims,
    /// Hex-encoded signature over [`CredentialClaims::signing_bytes`].
    pub signature: String,
}

impl AttestationEngine {
    /// Wrap an attestation's claims in a signed bearer credential.
    ///
    /// Expiry is issuance time plus the configured validity window.
    pub fn issue_credential(
        &self,
        attestation: &Attestation,
        signer: &dyn CredentialSigner,
    ) -> Result<BearerCredential, SignerError> {
        let claims = CredentialClaims {
            issuer: signer.issuer(),
            subject_commitment: attestation.subject_commitment,
            aggregate_digest: attestation.aggregate_digest,
            compliant: attestation.compliant,
            issued_at: attestation.issued_at,
            expires_at: attestation
                .issued_at
                .plus_days(self.config().credential_validity_days),
        };
        let payload = claims.signing_bytes()?;
        let signature = signer.sign(&payload)?;
        tracing::info!(
            issuer = %claims.issuer,
            expires_at = %claims.expires_at,
            "bearer credential issued"
        );
        Ok(BearerCredential {
            claims,
            signature: encode_hex(&signature),
        })
    }

    /// Verify a presented bearer credential.
    ///
    /// `Ok(false)` (never an error) for expired claims, a non-compliant
    /// flag, or a signature that fails cryptographic verification; `Err`
    /// only for undecodable structure.
    pub fn verify_credential(
        &self,
        credential: &BearerCredential,
        signer: &dyn CredentialSigner,
    ) -> Result<bool, SignerError> {
        if !credential.claims.compliant {
            tracing::debug!("rejecting non-compliant bearer credential");
            return Ok(false);
        }
        if credential.claims.expires_at < Timestamp::now() {
            tracing::debug!(
                expires_at = %credential.claims.expires_at,
                "rejecting expired bearer credential"
            );
            return Ok(false);
        }
        let signature = decode_hex(&credential.signature).ok_or_else(|| {
            SignerError::MalformedSignature("signature is not valid hex".to_string())
        })?;
        let payload = credential.claims.signing_bytes()?;
        signer.verify(&payload, &signature)
    }
}

fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
