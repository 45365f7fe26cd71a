//! Orderguard CLI - validate, merge and inspect order records.
//!
//! # Usage
//!
//! ```bash
//! # Validate an order creation record
//! og-cli validate order.json --kind create --strictness strict
//!
//! # Merge a checkout update into a stored order and write the result
//! og-cli merge order.json checkout.yaml --output merged.json
//!
//! # Print the wire table of a record kind
//! og-cli contract chargeback
//! ```
//!
//! # Commands
//!
//! - `validate` - Validate a record file of a given kind
//! - `merge` - Overlay a checkout update onto an order
//! - `contract` - Print wire field names and requiredness

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use orderguard_core::{RecordKind, Strictness};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "og-cli")]
#[command(author, version, about = "Orderguard CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a record file
    Validate {
        /// JSON or YAML record file
        file: PathBuf,

        /// Record kind (`create`, `checkout`, `fulfillment`, `chargeback`)
        #[arg(short, long)]
        kind: RecordKind,

        /// Validation strictness (`weak`, `strict`)
        #[arg(short, long)]
        strictness: Option<Strictness>,
    },
    /// Merge a checkout update into an order
    Merge {
        /// Order creation record
        order: PathBuf,

        /// Checkout update record
        checkout: PathBuf,

        /// Strictness used to validate the merged order
        #[arg(short, long)]
        strictness: Option<Strictness>,

        /// Write the merged order here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the wire contract of a record kind
    Contract {
        /// Record kind (`create`, `checkout`, `fulfillment`, `chargeback`)
        kind: RecordKind,
    },
}

fn main() {
    let config = CliConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.log_json));

    let result = config
        .map_err(Into::into)
        .and_then(|config| run(Cli::parse(), &config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays free for command output.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate {
            file,
            kind,
            strictness,
        } => {
            commands::validate::run(&file, kind, strictness.unwrap_or(config.strictness))?;
        }
        Commands::Merge {
            order,
            checkout,
            strictness,
            output,
        } => {
            commands::merge::run(
                &order,
                &checkout,
                strictness.unwrap_or(config.strictness),
                output.as_deref(),
            )?;
        }
        Commands::Contract { kind } => commands::contract::run(kind)?,
    }
    Ok(())
}
