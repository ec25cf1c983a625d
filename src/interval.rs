//! Closed time intervals and gap arithmetic.
//!
//! A [`TimeSlot`] is a closed interval `[start, end]`; overlap is inclusive
//! on both boundaries, so two slots that merely touch still count as
//! overlapping. [`free_slots`] inverts a set of busy slots within a query
//! range.

use jiff::Timestamp;
use serde::Serialize;

/// A closed time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeSlot {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Whether two closed intervals overlap. Boundary touches count: a slot
    /// ending at 12:00 overlaps one starting at 12:00.
    pub fn overlaps_inclusive(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// Gaps within `[range_start, range_end]` not covered by any busy slot.
///
/// Busy slots may be unsorted and may overlap each other; a busy slot
/// extending past the range end is clipped. Callers are expected to clamp
/// busy starts to `range_start` themselves. Returned gaps are ordered and
/// disjoint. An empty busy set yields the whole range as one gap.
pub fn free_slots(range_start: Timestamp, range_end: Timestamp, busy: &[TimeSlot]) -> Vec<TimeSlot> {
    let mut busy = busy.to_vec();
    busy.sort_by_key(|slot| slot.start);

    let mut gaps = Vec::new();
    let mut cursor = range_start;
    for slot in &busy {
        if cursor < slot.start {
            gaps.push(TimeSlot::new(cursor, slot.start.min(range_end)));
        }
        cursor = cursor.max(slot.end);
    }
    if cursor < range_end {
        gaps.push(TimeSlot::new(cursor, range_end));
    }
    gaps
}
