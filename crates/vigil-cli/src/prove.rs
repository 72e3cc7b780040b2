//! # Prove Subcommand
//!
//! Screens an identity and, when it is clear, issues a compliance
//! attestation. With `--sign` the attestation is accompanied by a
//! bearer credential signed with the key from `VIGIL_SIGNING_KEY_HEX`.
//!
//! A designated subject is a policy refusal, not an operational error:
//! the command prints the refusal and exits 1 without producing output.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use vigil_engine::{Attestation, AttestationError, BearerCredential, Ed25519Signer};

use crate::{build_engine, IdentityArgs};

/// Arguments for the `vigil prove` subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Identity to screen and attest.
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Write the attestation bundle to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also issue a signed bearer credential. The signing key comes from
    /// the VIGIL_SIGNING_KEY_HEX environment variable; an ephemeral key
    /// is generated (with a warning) when it is unset.
    #[arg(long)]
    pub sign: bool,
}

/// An attestation plus its optional bearer credential, as written by
/// `vigil prove` and read back by `vigil verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofBundle {
    /// The issued attestation.
    pub attestation: Attestation,
    /// Present when the bundle was issued with `--sign`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<BearerCredential>,
}

/// Execute the prove subcommand.
///
/// Returns exit code: 0 when an attestation was issued, 1 when the
/// subject is designated and issuance was refused.
pub fn run_prove(args: &ProveArgs, watchlists: Option<&Path>) -> Result<u8> {
    let engine = build_engine(watchlists)?;

    let attestation = match engine.issue_for(&args.identity.to_query()) {
        Ok(attestation) => attestation,
        Err(AttestationError::NonCompliantSubject {
            list_id,
            program_tag,
        }) => {
            println!("REFUSED: subject is designated on list '{list_id}' (program '{program_tag}')");
            println!("No attestation was issued.");
            return Ok(1);
        }
        Err(other) => return Err(other).context("attestation issuance failed"),
    };

    let credential = if args.sign {
        let signer = Ed25519Signer::from_environment();
        Some(
            engine
                .issue_credential(&attestation, &signer)
                .context("failed to sign bearer credential")?,
        )
    } else {
        None
    };

    let bundle = ProofBundle {
        attestation,
        credential,
    };
    let json = serde_json::to_string_pretty(&bundle)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write attestation: {}", path.display()))?;
            println!("OK: attestation written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(0)
}
