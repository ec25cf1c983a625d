//! Plain-text and JSON formatting for CLI output.

use serde::Serialize;

use crate::fleet::SpaceshipAvailability;
use crate::interval::TimeSlot;
use crate::model::Cruise;

pub fn json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("failed to serialize: {e}"))
}

/// One-line cruise summary for lists.
pub fn cruise_line(cruise: &Cruise) -> String {
    format!(
        "#{} ship {} dest {} -> {} departs {} ({} min, {:.2}, {})",
        cruise.id,
        cruise.spaceship_id,
        cruise.departure_destination_id,
        cruise.arrival_destination_id,
        cruise.departure,
        cruise.duration_minutes,
        cruise.seat_price,
        cruise.status,
    )
}

/// Multi-line cruise details for `cruise show`.
pub fn cruise_details(cruise: &Cruise) -> String {
    format!(
        "Cruise #{}\n\
         Spaceship:   {}\n\
         Route:       destination {} -> destination {}\n\
         Departure:   {}\n\
         Arrival:     {} ({} min)\n\
         Seat price:  {:.2}\n\
         Status:      {}\n\
         Created by:  {}",
        cruise.id,
        cruise.spaceship_id,
        cruise.departure_destination_id,
        cruise.arrival_destination_id,
        cruise.departure,
        cruise.arrival(),
        cruise.duration_minutes,
        cruise.seat_price,
        cruise.status,
        cruise.created_by,
    )
}

pub fn slot_line(slot: &TimeSlot) -> String {
    format!("{} .. {}", slot.start, slot.end)
}

/// Per-spaceship availability block.
pub fn availability_block(availability: &SpaceshipAvailability) -> String {
    let mut out = format!(
        "Spaceship #{} ({}, capacity {}, {} km/h)",
        availability.spaceship_id,
        availability.model_name,
        availability.capacity,
        availability.cruise_speed_kmph,
    );
    for slot in &availability.free_slots {
        out.push_str("\n  free ");
        out.push_str(&slot_line(slot));
    }
    out
}
