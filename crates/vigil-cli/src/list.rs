//! # List Subcommand
//!
//! Shows the loaded watchlists, their entry counts, and the aggregate
//! digest of the current store state.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::build_engine;

/// Arguments for the `vigil list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show individual entries, not just per-list counts.
    #[arg(long)]
    pub entries: bool,
}

/// Execute the list subcommand. Always returns exit code 0.
pub fn run_list(args: &ListArgs, watchlists: Option<&Path>) -> Result<u8> {
    let engine = build_engine(watchlists)?;
    let snapshot = engine.store().snapshot();

    println!(
        "{} watchlists, {} entries (loaded {})",
        snapshot.lists().len(),
        snapshot.entry_count(),
        snapshot.loaded_at()
    );
    for list in snapshot.lists() {
        println!("  {} ({} entries)", list.id(), list.len());
        if args.entries {
            for entry in list.entries() {
                println!(
                    "    {}  {}  {}",
                    entry.name, entry.date_of_birth, entry.program_tag
                );
            }
        }
    }
    println!("aggregate digest: {}", snapshot.aggregate_digest());

    Ok(0)
}
