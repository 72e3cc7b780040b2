//! # vigil CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing. All commands share a
//! global `--watchlists` source so that screening, issuance, and
//! verification run against the same store.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vigil_cli::info::run_info;
use vigil_cli::list::{run_list, ListArgs};
use vigil_cli::prove::{run_prove, ProveArgs};
use vigil_cli::screen::{run_screen, ScreenArgs};
use vigil_cli::verify::{run_verify, VerifyArgs};

/// vigil — watchlist screening and compliance attestation
///
/// Screens identities against sanctions watchlists, issues cryptographic
/// compliance attestations for clear subjects, and verifies previously
/// issued attestations against the current watchlist state.
#[derive(Parser, Debug)]
#[command(name = "vigil", version = "0.2.1", about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a watchlist YAML file. Defaults to the built-in lists.
    #[arg(long, global = true)]
    watchlists: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Screen an identity against the loaded watchlists.
    Screen(ScreenArgs),

    /// Screen an identity and issue a compliance attestation if clear.
    Prove(ProveArgs),

    /// Verify a previously issued attestation against the current store.
    Verify(VerifyArgs),

    /// Show the loaded watchlists and their entry counts.
    List(ListArgs),

    /// Show engine status, policy thresholds, and the aggregate digest.
    Info,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("vigil CLI v0.2.1 starting");

    let watchlists = cli.watchlists.as_deref();

    let result = match cli.command {
        Commands::Screen(args) => run_screen(&args, watchlists),
        Commands::Prove(args) => run_prove(&args, watchlists),
        Commands::Verify(args) => run_verify(&args, watchlists),
        Commands::List(args) => run_list(&args, watchlists),
        Commands::Info => run_info(watchlists),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
