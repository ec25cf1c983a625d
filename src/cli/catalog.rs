//! Catalog commands: ship models, spaceships, and destinations.

use clap::Subcommand;

use crate::storage::{Storage, catalog};

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// Add a ship model. Prints the model id.
    Add {
        /// Model name.
        #[arg(long)]
        name: String,

        /// Seat capacity.
        #[arg(long)]
        capacity: i64,

        /// Cruise speed in km/h. Must be positive.
        #[arg(long)]
        speed: i64,
    },

    /// List ship models.
    List,
}

#[derive(Debug, Subcommand)]
pub enum ShipCommand {
    /// Add a spaceship. Prints the spaceship id.
    Add {
        /// Model id.
        #[arg(long)]
        model: i64,
    },

    /// List spaceships.
    List {
        /// Only active spaceships.
        #[arg(long)]
        active: bool,
    },

    /// Reactivate a spaceship so it can be scheduled.
    Activate {
        /// Spaceship id.
        id: i64,
    },

    /// Deactivate a spaceship. Existing cruises are untouched; new ones are
    /// rejected.
    Deactivate {
        /// Spaceship id.
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum DestinationCommand {
    /// Add a destination. Prints the destination id.
    Add {
        /// Destination name.
        #[arg(long)]
        name: String,

        /// Distance from the common origin, in km.
        #[arg(long)]
        distance: i64,
    },

    /// List destinations.
    List,

    /// Reactivate a destination.
    Activate {
        /// Destination id.
        id: i64,
    },

    /// Deactivate a destination. New cruises may not use it.
    Deactivate {
        /// Destination id.
        id: i64,
    },
}

pub(super) fn dispatch_model(storage: &Storage, command: ModelCommand) -> Result<(), String> {
    match command {
        ModelCommand::Add { name, capacity, speed } => {
            let id = catalog::insert_ship_model(storage.conn(), &name, capacity, speed)
                .map_err(|e| format!("failed to add model: {e}"))?;
            println!("{id}");
            Ok(())
        }
        ModelCommand::List => {
            let models = catalog::list_ship_models(storage.conn()).map_err(|e| e.to_string())?;
            if models.is_empty() {
                println!("No ship models");
                return Ok(());
            }
            for model in models {
                println!(
                    "#{} {} (capacity {}, {} km/h)",
                    model.id, model.name, model.capacity, model.cruise_speed_kmph
                );
            }
            Ok(())
        }
    }
}

pub(super) fn dispatch_ship(storage: &Storage, command: ShipCommand) -> Result<(), String> {
    match command {
        ShipCommand::Add { model } => {
            let id = catalog::insert_spaceship(storage.conn(), model)
                .map_err(|e| format!("failed to add spaceship: {e}"))?;
            println!("{id}");
            Ok(())
        }
        ShipCommand::List { active } => {
            let ships = if active {
                catalog::active_spaceships(storage.conn())
            } else {
                catalog::list_spaceships(storage.conn())
            }
            .map_err(|e| e.to_string())?;
            if ships.is_empty() {
                println!("No spaceships");
                return Ok(());
            }
            for ship in ships {
                let state = if ship.active { "active" } else { "inactive" };
                println!("#{} model {} ({state})", ship.id, ship.model_id);
            }
            Ok(())
        }
        ShipCommand::Activate { id } => set_ship_active(storage, id, true),
        ShipCommand::Deactivate { id } => set_ship_active(storage, id, false),
    }
}

fn set_ship_active(storage: &Storage, id: i64, active: bool) -> Result<(), String> {
    let updated = catalog::set_spaceship_active(storage.conn(), id, active).map_err(|e| e.to_string())?;
    if !updated {
        return Err(format!("spaceship {id} not found"));
    }
    println!("Spaceship {id} {}", if active { "activated" } else { "deactivated" });
    Ok(())
}

pub(super) fn dispatch_destination(storage: &Storage, command: DestinationCommand) -> Result<(), String> {
    match command {
        DestinationCommand::Add { name, distance } => {
            let id = catalog::insert_destination(storage.conn(), &name, distance)
                .map_err(|e| format!("failed to add destination: {e}"))?;
            println!("{id}");
            Ok(())
        }
        DestinationCommand::List => {
            let destinations = catalog::list_destinations(storage.conn()).map_err(|e| e.to_string())?;
            if destinations.is_empty() {
                println!("No destinations");
                return Ok(());
            }
            for destination in destinations {
                let state = if destination.active { "active" } else { "inactive" };
                println!(
                    "#{} {} ({} km from origin, {state})",
                    destination.id, destination.name, destination.distance_from_origin_km
                );
            }
            Ok(())
        }
        DestinationCommand::Activate { id } => set_destination_active(storage, id, true),
        DestinationCommand::Deactivate { id } => set_destination_active(storage, id, false),
    }
}

fn set_destination_active(storage: &Storage, id: i64, active: bool) -> Result<(), String> {
    let updated = catalog::set_destination_active(storage.conn(), id, active).map_err(|e| e.to_string())?;
    if !updated {
        return Err(format!("destination {id} not found"));
    }
    println!("Destination {id} {}", if active { "activated" } else { "deactivated" });
    Ok(())
}
