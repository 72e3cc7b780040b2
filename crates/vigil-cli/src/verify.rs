//! # Verify Subcommand
//!
//! Re-verifies a previously issued attestation against the current
//! watchlist state. Accepts either a bare attestation JSON document or
//! the bundle written by `vigil prove`.
//!
//! When the bundle carries a bearer credential and a signing key is
//! configured, the credential signature and expiry are checked too.
//! Without a configured key the credential is reported as unchecked;
//! it does not affect the exit code.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Deserialize;

use vigil_engine::{Attestation, Ed25519Signer, SIGNING_KEY_ENV};

use crate::build_engine;
use crate::prove::ProofBundle;

/// Arguments for the `vigil verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the attestation or attestation bundle JSON file.
    #[arg(value_name = "FILE")]
    pub attestation: PathBuf,
}

/// Accepted on-disk shapes: the `prove` bundle, or a bare attestation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProofDocument {
    Bundle(ProofBundle),
    Bare(Attestation),
}

/// Execute the verify subcommand.
///
/// Returns exit code: 0 when everything checked is valid, 1 otherwise.
pub fn run_verify(args: &VerifyArgs, watchlists: Option<&Path>) -> Result<u8> {
    if !args.attestation.exists() {
        bail!("attestation file not found: {}", args.attestation.display());
    }

    let content = std::fs::read_to_string(&args.attestation)
        .with_context(|| format!("failed to read {}", args.attestation.display()))?;
    let document: ProofDocument = serde_json::from_str(&content)
        .with_context(|| format!("not an attestation document: {}", args.attestation.display()))?;
    let (attestation, credential) = match document {
        ProofDocument::Bundle(bundle) => (bundle.attestation, bundle.credential),
        ProofDocument::Bare(attestation) => (attestation, None),
    };

    let engine = build_engine(watchlists)?;
    let outcome = engine.evaluate(&attestation);
    println!("attestation {}: {outcome}", attestation.attestation_id);

    let mut all_valid = outcome.is_valid();
    if let Some(credential) = credential {
        if std::env::var(SIGNING_KEY_ENV).is_ok() {
            let signer = Ed25519Signer::from_environment();
            let credential_valid = engine
                .verify_credential(&credential, &signer)
                .context("credential verification failed")?;
            println!(
                "credential: {}",
                if credential_valid { "valid" } else { "invalid" }
            );
            all_valid = all_valid && credential_valid;
        } else {
            println!("credential: not checked ({SIGNING_KEY_ENV} is not set)");
        }
    }

    Ok(if all_valid { 0 } else { 1 })
}
