//! CLI interface for Starlane.
//!
//! Designed for fleet operators and automation alike: each subcommand is
//! non-interactive, arguments in, structured output out. Commands split by
//! area:
//!
//! - `starlane cruise ...`: schedule, inspect, cancel, and sweep cruises.
//! - `starlane fleet ...`: fleet-wide availability queries.
//! - `starlane model|ship|destination ...`: catalog maintenance.

mod catalog;
mod cruise;
mod fleet;
mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::storage::Storage;

/// Starlane: schedule and track cruises for a spaceship fleet.
#[derive(Debug, Parser)]
#[command(name = "starlane", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Path to the fleet database.
    /// Defaults to the configured path, then `~/.starlane/fleet.sqlite`.
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow: scheduling a cruise
  1. starlane model add --name Starliner --capacity 120 --speed 40000
  2. starlane ship add --model 1
  3. starlane destination add --name "Luna Port" --distance 384000
     starlane destination add --name "Mars Orbital" --distance 225000000
  4. starlane cruise new --ship 1 --from 1 --to 2 \
       --departure 2026-03-01T10:00:00Z --price 199.50 --as fleet-ops
     (prints the cruise id)
  5. starlane fleet availability --start 2026-03-01T00:00:00Z --end 2026-03-08T00:00:00Z"#;

#[derive(Debug, Subcommand)]
enum Command {
    /// Schedule, inspect, cancel, and sweep cruises.
    Cruise {
        #[command(subcommand)]
        command: cruise::CruiseCommand,
    },

    /// Fleet-wide availability queries.
    Fleet {
        #[command(subcommand)]
        command: fleet::FleetCommand,
    },

    /// Maintain ship models.
    Model {
        #[command(subcommand)]
        command: catalog::ModelCommand,
    },

    /// Maintain spaceships.
    Ship {
        #[command(subcommand)]
        command: catalog::ShipCommand,
    },

    /// Maintain destinations.
    Destination {
        #[command(subcommand)]
        command: catalog::DestinationCommand,
    },
}

pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let path = cli
        .database
        .or_else(|| config.database.clone())
        .or_else(Storage::default_path)
        .ok_or("could not determine home directory")?;
    let mut storage = Storage::open(&path)
        .map_err(|e| format!("failed to open database at {}: {e}", path.display()))?;

    match cli.command {
        Command::Cruise { command } => cruise::dispatch(&mut storage, &config, command),
        Command::Fleet { command } => fleet::dispatch(&storage, command),
        Command::Model { command } => catalog::dispatch_model(&storage, command),
        Command::Ship { command } => catalog::dispatch_ship(&storage, command),
        Command::Destination { command } => catalog::dispatch_destination(&storage, command),
    }
}
