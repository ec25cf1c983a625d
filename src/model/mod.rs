//! Core data model for Starlane.
//!
//! Cruises are the unit of scheduling: one spaceship travelling between two
//! destinations. The catalog types (spaceships, ship models, destinations)
//! exist so the scheduler can validate references and derive durations.

mod catalog;
mod cruise;

pub use catalog::{Destination, ShipModel, Spaceship};
pub use cruise::{Cruise, CruiseStatus};
