//! # Info Subcommand
//!
//! Prints the engine status document: version, loaded watchlists,
//! policy thresholds, circuit width, and the current aggregate digest.

use std::path::Path;

use anyhow::Result;

use crate::build_engine;

/// Execute the info subcommand. Always returns exit code 0.
pub fn run_info(watchlists: Option<&Path>) -> Result<u8> {
    let engine = build_engine(watchlists)?;
    println!("{}", serde_json::to_string_pretty(&engine.info())?);
    Ok(0)
}
