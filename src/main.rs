//! # sealswap
//!
//! Moves encrypted values from a SealedSecret manifest into Helm values.
//!
//! ## Usage
//!
//! ```bash
//! # Swap secret.yml and values.yml in the current directory
//! sealswap
//!
//! # Explicit files
//! sealswap --secret-file chart/templates/secret.yml --values-file chart/values.yml
//!
//! # Show the result without writing
//! sealswap --dry-run
//! ```

use anyhow::Result;
use clap::Parser;
use sealed_values_swap::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_SECRET_FILE, DEFAULT_VALUES_FILE, SECRET_FILE_ENV,
    SUCCESS_MESSAGE, VALUES_FILE_ENV,
};
use sealed_values_swap::{run, SwapConfig, SwapPlan, UnmatchedPolicy};
use std::path::PathBuf;
use tracing::{debug, error};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Move SealedSecret ciphertext into Helm values and template the secret
#[derive(Parser, Debug)]
#[command(name = "sealswap", version, long_version = LONG_VERSION)]
#[command(
    about = "Move SealedSecret ciphertext into Helm values",
    long_about = None,
    after_help = "\
Keys match when the secret key, lower-cased, exists under sealedsecrets.encrypteddata.
Unmatched secret entries are dropped unless --keep-unmatched is given.

Examples:
  sealswap
  sealswap --dry-run
  sealswap -s secret.yml -f chart/values.yml --keep-unmatched
"
)]
struct Cli {
    /// SealedSecret manifest holding spec.encryptedData
    #[arg(short, long, env = SECRET_FILE_ENV, default_value = DEFAULT_SECRET_FILE)]
    secret_file: PathBuf,

    /// Helm values manifest holding sealedsecrets.encrypteddata
    #[arg(short = 'f', long, env = VALUES_FILE_ENV, default_value = DEFAULT_VALUES_FILE)]
    values_file: PathBuf,

    /// Print both rendered manifests instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Keep entries without a counterpart instead of dropping them
    #[arg(long)]
    keep_unmatched: bool,
}

impl From<Cli> for SwapConfig {
    fn from(cli: Cli) -> Self {
        Self {
            secret_file: cli.secret_file,
            values_file: cli.values_file,
            dry_run: cli.dry_run,
            unmatched: if cli.keep_unmatched {
                UnmatchedPolicy::Keep
            } else {
                UnmatchedPolicy::Drop
            },
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the user-facing messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SwapConfig::from(Cli::parse());
    debug!("Resolved configuration: {config:?}");

    match run(&config) {
        Ok(plan) if config.dry_run => {
            print_plan(&plan);
            Ok(())
        }
        Ok(_) => {
            println!();
            println!("{SUCCESS_MESSAGE}");
            Ok(())
        }
        // A missing input is reported, not treated as a failure
        Err(e) if e.is_file_not_found() => {
            debug!("Missing input: {}", e.path().display());
            println!("{e}");
            Ok(())
        }
        Err(e) => {
            error!("Swap aborted while processing {}", e.path().display());
            Err(e.into())
        }
    }
}

fn print_plan(plan: &SwapPlan) {
    println!("# {}", plan.secret_file.display());
    print!("{}", plan.secret_yaml);
    println!("---");
    println!("# {}", plan.values_file.display());
    print!("{}", plan.values_yaml);
}
