//! # Attestation Engine
//!
//! Issues self-verifying attestations for subjects that cleared
//! screening, and re-verifies presented attestations against the
//! current watchlist state.
//!
//! ## Security Invariant
//!
//! Issuance refuses non-compliant subjects unconditionally; there is no
//! code path that produces an attestation for a designated identity.
//! Verification fails closed: routine invalidity (stale aggregate
//! digest, tag mismatch, non-compliant flag) is a `false`/diagnostic
//! outcome, never an error. Verification recomputes hashes only; it
//! never re-runs fuzzy matching, preserving the "attestation proves a
//! prior screening" contract.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use thiserror::Error;
use uuid::Uuid;

use vigil_core::{Digest256, IdentityQuery, Timestamp, ValidationError};
use vigil_crypto::{circuit_inputs, commit_subject, proof_tag, AggregateDigest};
use vigil_watchlist::WatchlistStore;

use crate::config::EngineConfig;
use crate::screen::{screen_snapshot, Screener, ScreeningVerdict};

/// Format version stamped into every attestation.
pub const ATTESTATION_VERSION: &str = "1.0";

/// A self-verifying record that a subject cleared screening against a
/// specific watchlist state.
///
/// Immutable once issued. Verification trusts only `subject_commitment`
/// and recomputes everything else from the current store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Unique identifier for audit trails.
    pub attestation_id: Uuid,
    /// Commitment to the screened identity.
    pub subject_commitment: Digest256,
    /// Aggregate digest of the watchlist state at issuance.
    pub aggregate_digest: AggregateDigest,
    /// Screening outcome; always `true` for issued attestations.
    pub compliant: bool,
    /// Binds `subject_commitment` to `aggregate_digest`.
    pub proof_tag: Digest256,
    /// Issuance time.
    pub issued_at: Timestamp,
    /// Attestation format version.
    pub version: String,
}

/// Failures while issuing an attestation.
#[derive(Debug, Error)]
pub enum AttestationError {
    /// The subject is designated; attestations are never issued for
    /// designated identities. A policy refusal, not a system fault.
    #[error(
        "subject is designated on watchlist '{list_id}' (program '{program_tag}'); \
         attestation refused"
    )]
    NonCompliantSubject {
        /// List containing the designating row.
        list_id: String,
        /// Program tag of the designating row.
        program_tag: String,
    },

    /// The identity input failed validation.
    #[error("invalid identity: {0}")]
    InvalidIdentity(#[from] ValidationError),
}

/// Why a presented attestation was accepted or rejected.
///
/// [`AttestationEngine::verify`] folds this to a boolean; the variants
/// exist for diagnostics and operator output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The attestation verifies against the current watchlist state.
    Valid,
    /// The attestation is marked non-compliant and can never verify.
    NonCompliantAttestation,
    /// The watchlists changed since issuance; the attested digest no
    /// longer matches the current one. Invalid by design, not a fault.
    StaleAggregateDigest {
        /// Digest recorded at issuance.
        attested: AggregateDigest,
        /// Digest of the current watchlist state.
        current: AggregateDigest,
    },
    /// The recomputed proof tag does not match the stored one.
    ProofTagMismatch,
}

impl VerificationOutcome {
    /// Whether this outcome means the attestation is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid)
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationOutcome::Valid => write!(f, "valid"),
            VerificationOutcome::NonCompliantAttestation => {
                write!(f, "invalid: attestation is marked non-compliant")
            }
            VerificationOutcome::StaleAggregateDigest { attested, current } => write!(
                f,
                "invalid: stale aggregate digest (attested {attested}, current {current})"
            ),
            VerificationOutcome::ProofTagMismatch => {
                write!(f, "invalid: proof tag does not match recomputation")
            }
        }
    }
}

/// The attestation engine: screening, issuance, and verification over a
/// shared watchlist store.
#[derive(Debug, Clone)]
pub struct AttestationEngine {
    screener: Screener,
    config: EngineConfig,
}

impl AttestationEngine {
    /// Build an engine with default configuration.
    pub fn new(store: WatchlistStore) -> Self {
        AttestationEngine::with_config(store, EngineConfig::default())
    }

    /// Build an engine with explicit configuration.
    pub fn with_config(store: WatchlistStore, config: EngineConfig) -> Self {
        AttestationEngine {
            screener: Screener::new(store),
            config,
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The underlying watchlist store handle.
    pub fn store(&self) -> &WatchlistStore {
        self.screener.store()
    }

    /// Screen a query without issuing anything.
    pub fn screen(&self, query: &IdentityQuery) -> Result<ScreeningVerdict, ValidationError> {
        self.screener.screen(query)
    }

    /// Issue an attestation for a query and its screening verdict.
    ///
    /// # Errors
    ///
    /// [`AttestationError::NonCompliantSubject`] when the verdict is
    /// non-compliant; [`AttestationError::InvalidIdentity`] when the
    /// query fails validation.
    pub fn issue(
        &self,
        query: &IdentityQuery,
        verdict: &ScreeningVerdict,
    ) -> Result<Attestation, AttestationError> {
        let identity = query.canonicalize()?;
        if !verdict.compliant {
            return Err(refusal(verdict));
        }
        let aggregate = self.store().aggregate_digest();
        Ok(self.build_attestation(commit_subject(&identity), aggregate))
    }

    /// Screen a query and issue an attestation in one step.
    ///
    /// Screening and issuance observe the same snapshot, so the issued
    /// digest always matches the state the verdict was computed from,
    /// even with concurrent reloads.
    pub fn issue_for(&self, query: &IdentityQuery) -> Result<Attestation, AttestationError> {
        let identity = query.canonicalize()?;
        let snapshot = self.store().snapshot();
        let verdict = screen_snapshot(&identity, &snapshot);
        if !verdict.compliant {
            return Err(refusal(&verdict));
        }
        Ok(self.build_attestation(commit_subject(&identity), *snapshot.aggregate_digest()))
    }

    fn build_attestation(&self, subject: Digest256, aggregate: AggregateDigest) -> Attestation {
        let attestation = Attestation {
            attestation_id: Uuid::new_v4(),
            subject_commitment: subject,
            aggregate_digest: aggregate,
            compliant: true,
            proof_tag: proof_tag(&subject, &aggregate),
            issued_at: Timestamp::now(),
            version: ATTESTATION_VERSION.to_string(),
        };
        tracing::info!(
            attestation_id = %attestation.attestation_id,
            aggregate_digest = %attestation.aggregate_digest,
            "attestation issued"
        );
        attestation
    }

    /// Verify a presented attestation, reporting the precise outcome.
    ///
    /// Checks, in order: the compliant flag, digest freshness against
    /// the current store state, and the recomputed proof tag.
    pub fn evaluate(&self, attestation: &Attestation) -> VerificationOutcome {
        if !attestation.compliant {
            tracing::debug!(
                attestation_id = %attestation.attestation_id,
                "rejecting attestation marked non-compliant"
            );
            return VerificationOutcome::NonCompliantAttestation;
        }
        let current = self.store().aggregate_digest();
        if attestation.aggregate_digest != current {
            tracing::debug!(
                attestation_id = %attestation.attestation_id,
                attested = %attestation.aggregate_digest,
                current = %current,
                "rejecting attestation with stale aggregate digest"
            );
            return VerificationOutcome::StaleAggregateDigest {
                attested: attestation.aggregate_digest,
                current,
            };
        }
        let expected = proof_tag(&attestation.subject_commitment, &current);
        let tag_matches: bool = expected
            .as_bytes()
            .as_slice()
            .ct_eq(attestation.proof_tag.as_bytes().as_slice())
            .into();
        if tag_matches {
            VerificationOutcome::Valid
        } else {
            tracing::debug!(
                attestation_id = %attestation.attestation_id,
                "rejecting attestation with mismatched proof tag"
            );
            VerificationOutcome::ProofTagMismatch
        }
    }

    /// Verify a presented attestation, folded to the boolean contract.
    ///
    /// Fails closed: any routine invalidity is `false`, never an error.
    pub fn verify(&self, attestation: &Attestation) -> bool {
        self.evaluate(attestation).is_valid()
    }

    /// The current aggregate digest.
    pub fn aggregate_digest(&self) -> AggregateDigest {
        self.store().aggregate_digest()
    }

    /// Export the current entity commitments at the configured fixed
    /// circuit width (sorted, zero-padded, truncated if overfull).
    pub fn circuit_inputs(&self) -> Vec<Digest256> {
        let snapshot = self.store().snapshot();
        circuit_inputs(snapshot.entity_commitments(), self.config.circuit_size)
    }
}

fn refusal(verdict: &ScreeningVerdict) -> AttestationError {
    AttestationError::NonCompliantSubject {
        list_id: verdict
            .matched_list_id
            .as_ref()
            .map(|id| id.as_str().to_string())
            .unwrap_or_default(),
        program_tag: verdict
            .matched_entity
            .as_ref()
            .map(|e| e.program_tag.clone())
            .unwrap_or_default(),
    }
}
