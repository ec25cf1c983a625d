//! Cruise types: a scheduled journey and its lifecycle status.

use std::fmt;
use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;

use crate::interval::TimeSlot;

/// A scheduled journey of one spaceship between two destinations.
///
/// The schedule fields (spaceship, destinations, departure, duration) are
/// immutable once created; only the status changes, and only through the
/// scheduler's transitions. Cruises are never deleted.
#[derive(Debug, Clone, Serialize)]
pub struct Cruise {
    pub id: i64,
    pub spaceship_id: i64,
    pub departure_destination_id: i64,
    pub arrival_destination_id: i64,
    pub departure: Timestamp,
    /// Derived from destination distance and ship speed; always positive.
    pub duration_minutes: i64,
    pub seat_price: f64,
    pub status: CruiseStatus,
    pub created_by: String,
}

impl Cruise {
    /// Estimated arrival: departure plus the derived duration.
    pub fn arrival(&self) -> Timestamp {
        self.departure
            .saturating_add(SignedDuration::from_mins(self.duration_minutes))
            .expect("saturating_add with a SignedDuration is infallible")
    }

    /// The time range during which the spaceship is committed to this cruise.
    pub fn busy_interval(&self) -> TimeSlot {
        TimeSlot::new(self.departure, self.arrival())
    }
}

/// Where a cruise stands in its lifecycle.
///
/// Persisted as a row id in the `cruise_statuses` reference table; the
/// translation happens only at the storage edge (`storage::status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CruiseStatus {
    /// Departure is in the future.
    Scheduled,

    /// Departed but not yet arrived.
    InProgress,

    /// Arrived. Terminal.
    Completed,

    /// Cancelled before departure. Terminal; excluded from conflict checks.
    Cancelled,
}

impl CruiseStatus {
    pub const ALL: [CruiseStatus; 4] = [
        CruiseStatus::Scheduled,
        CruiseStatus::InProgress,
        CruiseStatus::Completed,
        CruiseStatus::Cancelled,
    ];

    /// The canonical persisted name of this status.
    pub fn name(self) -> &'static str {
        match self {
            CruiseStatus::Scheduled => "Scheduled",
            CruiseStatus::InProgress => "In Progress",
            CruiseStatus::Completed => "Completed",
            CruiseStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for CruiseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CruiseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(CruiseStatus::Scheduled),
            "in-progress" | "in progress" => Ok(CruiseStatus::InProgress),
            "completed" => Ok(CruiseStatus::Completed),
            "cancelled" => Ok(CruiseStatus::Cancelled),
            other => Err(format!(
                "unknown status '{other}' (expected scheduled, in-progress, completed, or cancelled)"
            )),
        }
    }
}
