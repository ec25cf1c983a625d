//! Cruise commands: schedule, cancel, inspect, and sweep.

use clap::Subcommand;
use jiff::Timestamp;

use crate::config::{Config, resolve_identity};
use crate::model::CruiseStatus;
use crate::schedule::{NewCruise, Scheduler};
use crate::storage::{CruiseFilter, Storage};

use super::format;

#[derive(Debug, Subcommand)]
pub enum CruiseCommand {
    /// Schedule a new cruise. Prints the cruise id.
    ///
    /// Duration is derived from the destinations' distances and the ship's
    /// cruise speed; the ship must be free (no overlapping cruise, boundary
    /// touches included) for the whole derived window.
    New {
        /// Spaceship id.
        #[arg(long = "ship")]
        spaceship: i64,

        /// Departure destination id.
        #[arg(long)]
        from: i64,

        /// Arrival destination id.
        #[arg(long)]
        to: i64,

        /// Departure time, RFC 3339 (e.g. 2026-03-01T10:00:00Z).
        #[arg(long)]
        departure: Timestamp,

        /// Seat price.
        #[arg(long)]
        price: f64,

        /// Identity recorded as creator.
        /// When omitted, STARLANE_IDENTITY or the configured identity is used.
        #[arg(long = "as")]
        identity: Option<String>,
    },

    /// Cancel a scheduled cruise. In-progress and completed cruises cannot
    /// be cancelled.
    Cancel {
        /// Cruise id.
        id: i64,
    },

    /// Show one cruise.
    Show {
        /// Cruise id.
        id: i64,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List cruises, optionally filtered. All filters combine with AND.
    List {
        /// Only cruises of this spaceship.
        #[arg(long = "ship")]
        spaceship: Option<i64>,

        /// Only cruises departing from this destination.
        #[arg(long)]
        from: Option<i64>,

        /// Only cruises arriving at this destination.
        #[arg(long)]
        to: Option<i64>,

        /// Only cruises departing at or after this time.
        #[arg(long)]
        after: Option<Timestamp>,

        /// Only cruises departing at or before this time.
        #[arg(long)]
        before: Option<Timestamp>,

        /// Only cruises in this status
        /// (scheduled, in-progress, completed, cancelled).
        #[arg(long)]
        status: Option<CruiseStatus>,

        /// Only cruises with seat price at or above this.
        #[arg(long)]
        min_price: Option<f64>,

        /// Only cruises with seat price at or below this.
        #[arg(long)]
        max_price: Option<f64>,

        /// Only cruises created by this identity.
        #[arg(long)]
        created_by: Option<String>,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Advance cruise statuses against the current time.
    ///
    /// Scheduled cruises whose departure has passed become in-progress;
    /// in-progress cruises whose arrival has passed become completed.
    Sweep,
}

pub(super) fn dispatch(storage: &mut Storage, config: &Config, command: CruiseCommand) -> Result<(), String> {
    let mut scheduler = Scheduler::new(storage);
    match command {
        CruiseCommand::New {
            spaceship,
            from,
            to,
            departure,
            price,
            identity,
        } => {
            let created_by = resolve_identity(identity.as_deref(), config)?;
            let id = scheduler
                .create_cruise(&NewCruise {
                    spaceship_id: spaceship,
                    departure_destination_id: from,
                    arrival_destination_id: to,
                    departure,
                    seat_price: price,
                    created_by,
                })
                .map_err(|e| e.to_string())?;
            println!("{id}");
            Ok(())
        }

        CruiseCommand::Cancel { id } => {
            let cancelled = scheduler.cancel_cruise(id).map_err(|e| e.to_string())?;
            if !cancelled {
                return Err(format!("cruise {id} not found"));
            }
            println!("Cancelled cruise {id}");
            Ok(())
        }

        CruiseCommand::Show { id, json } => {
            let cruise = scheduler
                .cruise(id)
                .map_err(|e| e.to_string())?
                .ok_or_else(|| format!("cruise {id} not found"))?;
            if json {
                println!("{}", format::json(&cruise)?);
            } else {
                println!("{}", format::cruise_details(&cruise));
            }
            Ok(())
        }

        CruiseCommand::List {
            spaceship,
            from,
            to,
            after,
            before,
            status,
            min_price,
            max_price,
            created_by,
            json,
        } => {
            let filter = CruiseFilter {
                spaceship_id: spaceship,
                departure_destination_id: from,
                arrival_destination_id: to,
                departing_after: after,
                departing_before: before,
                status,
                min_price,
                max_price,
                created_by,
            };
            let cruises = scheduler.search(&filter).map_err(|e| e.to_string())?;
            if json {
                println!("{}", format::json(&cruises)?);
                return Ok(());
            }
            if cruises.is_empty() {
                println!("No cruises");
                return Ok(());
            }
            for cruise in &cruises {
                println!("{}", format::cruise_line(cruise));
            }
            Ok(())
        }

        CruiseCommand::Sweep => {
            let transitions = scheduler.advance_statuses().map_err(|e| e.to_string())?;
            println!("{transitions} status transition(s) applied");
            Ok(())
        }
    }
}
