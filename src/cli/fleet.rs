//! Fleet commands: availability queries.

use clap::Subcommand;
use jiff::Timestamp;

use crate::fleet;
use crate::storage::Storage;

use super::format;

#[derive(Debug, Subcommand)]
pub enum FleetCommand {
    /// Free time windows per active spaceship across a time range.
    ///
    /// Spaceships with no free window in the range are omitted.
    Availability {
        /// Range start, RFC 3339.
        #[arg(long)]
        start: Timestamp,

        /// Range end, RFC 3339.
        #[arg(long)]
        end: Timestamp,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub(super) fn dispatch(storage: &Storage, command: FleetCommand) -> Result<(), String> {
    match command {
        FleetCommand::Availability { start, end, json } => {
            let results = fleet::availability(storage, start, end).map_err(|e| e.to_string())?;
            if json {
                println!("{}", format::json(&results)?);
                return Ok(());
            }
            if results.is_empty() {
                println!("No spaceships available in this range");
                return Ok(());
            }
            for availability in &results {
                println!("{}", format::availability_block(availability));
            }
            Ok(())
        }
    }
}
