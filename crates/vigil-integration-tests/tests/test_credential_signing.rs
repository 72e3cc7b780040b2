//! Bearer credential issuance and verification across the engine and
//! signer, including the split between state-bound attestations and
//! time-bound credentials.

use vigil_core::{EntityRecord, IdentityQuery};
use vigil_engine::{AttestationEngine, CredentialSigner, Ed25519Signer, EngineConfig};
use vigil_watchlist::{Watchlist, WatchlistStore};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn engine(validity_days: i64) -> AttestationEngine {
    let list = Watchlist::new(
        "sdn",
        vec![EntityRecord::new("LISTED PERSON", "1970-01-01", "TEST")],
    )
    .unwrap();
    AttestationEngine::with_config(
        WatchlistStore::with_lists(vec![list]).unwrap(),
        EngineConfig {
            credential_validity_days: validity_days,
            ..EngineConfig::default()
        },
    )
}

fn pinned_signer() -> Ed25519Signer {
    Ed25519Signer::from_hex(&"4e".repeat(32)).unwrap()
}

fn clear_query() -> IdentityQuery {
    IdentityQuery::new("Clear Subject", "1991-02-03")
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn credential_round_trip_with_pinned_key() {
    let engine = engine(30);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();

    // A signer rebuilt from the same key material verifies the
    // credential, as a separate verifying process would.
    let rebuilt = pinned_signer();
    assert!(engine.verify_credential(&credential, &rebuilt).unwrap());
    assert_eq!(credential.claims.issuer, rebuilt.issuer());
}

#[test]
fn credential_round_trips_through_json() {
    let engine = engine(30);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();

    let json = serde_json::to_string_pretty(&credential).unwrap();
    let back = serde_json::from_str(&json).unwrap();
    assert!(engine.verify_credential(&back, &pinned_signer()).unwrap());
}

// ---------------------------------------------------------------------------
// Attestation state-binding vs credential time-binding
// ---------------------------------------------------------------------------

#[test]
fn credential_outlives_watchlist_reload_while_attestation_goes_stale() {
    let engine = engine(30);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();

    engine
        .store()
        .reload(vec![Watchlist::new(
            "sdn",
            vec![EntityRecord::new("ANOTHER PERSON", "1960-06-06", "TEST")],
        )
        .unwrap()])
        .unwrap();

    // The attestation binds to watchlist state and is now stale; the
    // credential binds to its expiry window and keeps verifying.
    assert!(!engine.verify(&attestation));
    assert!(engine
        .verify_credential(&credential, &pinned_signer())
        .unwrap());
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------

#[test]
fn expired_credential_is_rejected() {
    let engine = engine(-1);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();
    assert!(!engine
        .verify_credential(&credential, &pinned_signer())
        .unwrap());
}

#[test]
fn foreign_key_is_rejected() {
    let engine = engine(30);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();
    let foreign = Ed25519Signer::from_hex(&"9c".repeat(32)).unwrap();
    assert!(!engine.verify_credential(&credential, &foreign).unwrap());
}

#[test]
fn claims_tampering_breaks_the_signature() {
    let engine = engine(30);
    let attestation = engine.issue_for(&clear_query()).unwrap();
    let mut credential = engine
        .issue_credential(&attestation, &pinned_signer())
        .unwrap();

    // Substitute another subject's commitment into signed claims.
    let other = engine
        .issue_for(&IdentityQuery::new("Other Subject", "1985-05-05"))
        .unwrap();
    credential.claims.subject_commitment = other.subject_commitment;
    assert!(!engine
        .verify_credential(&credential, &pinned_signer())
        .unwrap());
}
