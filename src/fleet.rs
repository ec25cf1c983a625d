//! Fleet availability: free time windows per spaceship across a query range.

use jiff::Timestamp;
use serde::Serialize;

use crate::interval::{self, TimeSlot};
use crate::schedule::{Result, ScheduleError};
use crate::storage::{Storage, catalog, cruise};

/// An active spaceship's free windows within a query range, with its model
/// profile for the caller's benefit.
#[derive(Debug, Serialize)]
pub struct SpaceshipAvailability {
    pub spaceship_id: i64,
    pub model_id: i64,
    pub model_name: String,
    pub capacity: i64,
    pub cruise_speed_kmph: i64,
    pub free_slots: Vec<TimeSlot>,
}

/// Computes free windows for every active spaceship across `[start, end)`.
///
/// Busy intervals come from the same inclusive-overlap query the scheduler
/// uses for conflict detection. A spaceship with no overlapping cruise is
/// free for the whole range; one with no free window at all is omitted.
/// Spaceships whose model row is missing are skipped.
pub fn availability(storage: &Storage, start: Timestamp, end: Timestamp) -> Result<Vec<SpaceshipAvailability>> {
    if start >= end {
        return Err(ScheduleError::InvalidRange);
    }

    let conn = storage.conn();
    let statuses = storage.statuses();
    let mut results = Vec::new();

    for ship in catalog::active_spaceships(conn)? {
        let Some(model) = catalog::ship_model_by_id(conn, ship.model_id)? else {
            continue;
        };

        let overlapping = cruise::overlapping_for_spaceship(conn, statuses, ship.id, start, end)?;

        let free_slots = if overlapping.is_empty() {
            vec![TimeSlot::new(start, end)]
        } else {
            // Clamp busy starts to the range start; the gap walk requires it.
            let busy: Vec<TimeSlot> = overlapping
                .iter()
                .map(|c| {
                    let slot = c.busy_interval();
                    TimeSlot::new(slot.start.max(start), slot.end)
                })
                .collect();
            interval::free_slots(start, end, &busy)
        };

        if free_slots.is_empty() {
            continue;
        }

        results.push(SpaceshipAvailability {
            spaceship_id: ship.id,
            model_id: model.id,
            model_name: model.name,
            capacity: model.capacity,
            cruise_speed_kmph: model.cruise_speed_kmph,
            free_slots,
        });
    }

    Ok(results)
}
