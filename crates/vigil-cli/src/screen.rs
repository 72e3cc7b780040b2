//! # Screen Subcommand
//!
//! Screens one identity against the loaded watchlists and reports the
//! verdict. The exit code carries the outcome so the command composes
//! into onboarding pipelines without parsing output.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::{build_engine, IdentityArgs};

/// Arguments for the `vigil screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Identity to screen.
    #[command(flatten)]
    pub identity: IdentityArgs,

    /// Emit the full verdict as pretty-printed JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Execute the screen subcommand.
///
/// Returns exit code: 0 when the subject is clear, 1 when the subject
/// is designated. Operational failures surface as errors.
pub fn run_screen(args: &ScreenArgs, watchlists: Option<&Path>) -> Result<u8> {
    let engine = build_engine(watchlists)?;
    let verdict = engine
        .screen(&args.identity.to_query())
        .context("screening query rejected")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!(
            "Screened against {} entries across {} watchlists.",
            verdict.checked_entry_count,
            verdict.checked_list_ids.len()
        );
        match (&verdict.matched_entity, &verdict.matched_list_id) {
            (Some(entity), Some(list_id)) => {
                println!(
                    "FAIL: designated as '{}' on list '{}' (program {}, confidence {:.2})",
                    entity.name, list_id, entity.program_tag, verdict.confidence
                );
            }
            _ => println!("OK: no designating match"),
        }
    }

    Ok(if verdict.compliant { 0 } else { 1 })
}
