//! # vigil CLI
//!
//! Command-line interface for the vigil screening stack.
//!
//! ## Subcommands
//!
//! - `screen` — screen an identity against the loaded watchlists
//! - `prove` — screen an identity and issue a compliance attestation
//! - `verify` — verify a previously issued attestation against the current store
//! - `list` — show the loaded watchlists and their entries
//! - `info` — show engine status, policy thresholds, and the aggregate digest
//!
//! Every command operates on the built-in watchlists unless `--watchlists`
//! points at a YAML file. Verification only succeeds when the store holds the
//! same lists the attestation was issued against, so `verify` must be given
//! the same watchlist source as the `prove` run that produced the file.

pub mod info;
pub mod list;
pub mod prove;
pub mod screen;
pub mod verify;

use std::path::Path;

use anyhow::Context;
use clap::Args;
use vigil_core::IdentityQuery;
use vigil_engine::{AttestationEngine, EngineConfig};
use vigil_watchlist::{builtin_watchlists, watchlists_from_path, WatchlistStore};

/// Identity fields shared by the `screen` and `prove` subcommands.
#[derive(Args, Debug)]
pub struct IdentityArgs {
    /// Full name of the subject.
    #[arg(long)]
    pub name: String,

    /// Date of birth in YYYY-MM-DD form.
    #[arg(long)]
    pub dob: String,

    /// Optional address used to salt the subject commitment.
    #[arg(long)]
    pub address: Option<String>,

    /// Optional wallet reference used to salt the subject commitment.
    #[arg(long)]
    pub wallet: Option<String>,

    /// Optional bank reference used to salt the subject commitment.
    #[arg(long)]
    pub bank: Option<String>,
}

impl IdentityArgs {
    /// Assembles the raw screening query. Validation happens in the engine.
    pub fn to_query(&self) -> IdentityQuery {
        let mut query = IdentityQuery::new(&self.name, &self.dob);
        if let Some(address) = &self.address {
            query = query.with_address(address);
        }
        if let Some(wallet) = &self.wallet {
            query = query.with_wallet_reference(wallet);
        }
        if let Some(bank) = &self.bank {
            query = query.with_bank_reference(bank);
        }
        query
    }
}

/// Builds an attestation engine from either a watchlist YAML file or the
/// built-in lists, with configuration drawn from the environment.
pub fn build_engine(watchlists: Option<&Path>) -> anyhow::Result<AttestationEngine> {
    let lists = match watchlists {
        Some(path) => watchlists_from_path(path)
            .with_context(|| format!("failed to load watchlists from {}", path.display()))?,
        None => builtin_watchlists(),
    };
    let store = WatchlistStore::with_lists(lists).context("failed to build watchlist store")?;
    Ok(AttestationEngine::with_config(
        store,
        EngineConfig::from_environment(),
    ))
}
