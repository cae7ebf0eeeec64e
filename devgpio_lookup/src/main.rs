//! # devgpio lookup binary
//!
//! Select a board, build the pin registry and resolve GPIO identifiers.
//!
//! # Usage
//!
//! ```bash
//! # Resolve against the board configured in /etc/devgpio/gpio.toml
//! devgpio_lookup P1-08 GPIO17
//!
//! # Pick the board on the command line, no config file needed
//! devgpio_lookup --board raspi_bp J8-27 GPIO0 0
//!
//! # Dump a board's table as JSON lines
//! devgpio_lookup --board beaglebone_black --list --json
//! ```

#![deny(warnings)]

use clap::Parser;
use devgpio_common::prelude::*;
use devgpio_lookup::{LookupCore, check_reports};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// devgpio lookup - resolve GPIO identifiers for the selected board
#[derive(Parser, Debug)]
#[command(name = "devgpio_lookup")]
#[command(version)]
#[command(about = "Resolve GPIO keys, names and numbers to canonical pin numbers")]
#[command(long_about = None)]
struct Args {
    /// Path to gpio.toml.
    #[arg(short, long, default_value = "/etc/devgpio/gpio.toml")]
    config: PathBuf,

    /// Board to load (raspi_b_rev2, raspi_bp, beaglebone_black).
    /// Overrides the config file; the file may be absent when given.
    #[arg(short, long)]
    board: Option<Board>,

    /// Print every alias of the selected board
    #[arg(short, long)]
    list: bool,

    /// Output results and logs as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Identifiers to resolve (header key, GPIO name or number)
    identifiers: Vec<String>,
}

/// One line of `--list --json` output.
#[derive(Serialize)]
struct AliasLine<'a> {
    namespace: Namespace,
    alias: &'a str,
    pin: u32,
}

fn main() {
    if let Err(e) = run() {
        error!("devgpio_lookup failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging depends on the config, so read it before anything is logged.
    let config = LookupCore::load_or_board(&args.config, args.board);
    let log_level = config
        .as_ref()
        .map(|c| c.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);
    let config = config?;

    info!(
        "devgpio_lookup v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        config.shared.service_name
    );

    let mut core = LookupCore::new(config)?;
    if let Some(board) = args.board {
        core = core.with_board_override(board);
    }
    let registry = core.init()?;

    if args.list {
        print_table(registry, args.json)?;
    }

    let reports = core.resolve_all(args.identifiers.as_slice())?;
    for report in &reports {
        if args.json {
            println!("{}", serde_json::to_string(report)?);
        } else {
            println!("{report}");
        }
    }

    check_reports(&reports)?;
    Ok(())
}

fn print_table(registry: &PinRegistry, json: bool) -> Result<(), serde_json::Error> {
    let board = registry.board();
    if !json {
        println!("# {} ({})", board, board.description());
    }
    for namespace in Namespace::RESOLUTION_ORDER {
        let aliases = registry.aliases(namespace);
        if !json {
            println!("[{namespace}] {} entries", aliases.len());
        }
        for (alias, pin) in aliases {
            if json {
                let line = AliasLine { namespace, alias, pin };
                println!("{}", serde_json::to_string(&line)?);
            } else {
                println!("  {alias:<8} {pin}");
            }
        }
    }
    Ok(())
}

/// Setup tracing subscriber.
///
/// `RUST_LOG` wins, then `--verbose`, then the config's `log_level`.
fn setup_tracing(args: &Args, log_level: LogLevel) {
    let default = if args.verbose {
        "debug"
    } else {
        log_level.as_directive()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr; stdout carries the lookup results.
    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
