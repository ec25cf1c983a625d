//! Catalog types: the reference data the scheduler validates against.

use serde::Serialize;

/// A schedulable transport unit. Capability (capacity, speed) comes from its
/// model. Only active spaceships can be scheduled.
#[derive(Debug, Clone, Serialize)]
pub struct Spaceship {
    pub id: i64,
    pub model_id: i64,
    pub active: bool,
}

/// A spaceship model: the capability profile shared by ships of this model.
#[derive(Debug, Clone, Serialize)]
pub struct ShipModel {
    pub id: i64,
    pub name: String,
    pub capacity: i64,
    /// Positive by schema constraint; duration derivation divides by this.
    pub cruise_speed_kmph: i64,
}

/// A waypoint. The distance scalar is a one-dimensional straight-line
/// approximation from a common origin, used for duration derivation.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub distance_from_origin_km: i64,
    pub active: bool,
}
