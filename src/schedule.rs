//! The cruise scheduler: creation with conflict detection, cancellation, the
//! time-driven status sweep, and the read queries.
//!
//! Every mutating operation runs inside a single immediate transaction, so
//! the conflict check and the insert are serialized against concurrent
//! writers and any error path rolls back with no partial state.

use jiff::{SignedDuration, Timestamp};

use crate::model::{Cruise, CruiseStatus};
use crate::storage::{CruiseFilter, NewCruiseRow, Storage, StorageError, catalog, cruise};

/// Errors surfaced by scheduling operations, one variant per rejected-request
/// class.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("seat price must be non-negative")]
    NegativeSeatPrice,

    #[error("spaceship {0} not found or inactive")]
    SpaceshipUnavailable(i64),

    #[error("departure destination {0} not found or inactive")]
    DepartureUnavailable(i64),

    #[error("arrival destination {0} not found or inactive")]
    ArrivalUnavailable(i64),

    #[error("departure and arrival destinations must differ")]
    SameDestination,

    #[error("ship model {model} for spaceship {spaceship} not found")]
    ModelMissing { spaceship: i64, model: i64 },

    #[error("spaceship {0} is already scheduled for a cruise overlapping this time window")]
    Conflict(i64),

    #[error("cruise {id} is {status}; only scheduled cruises can be cancelled")]
    NotCancellable { id: i64, status: CruiseStatus },

    #[error("invalid time range: start must precede end")]
    InvalidRange,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = core::result::Result<T, ScheduleError>;

/// A cruise creation request. Duration and status are derived, never supplied.
#[derive(Debug, Clone)]
pub struct NewCruise {
    pub spaceship_id: i64,
    pub departure_destination_id: i64,
    pub arrival_destination_id: i64,
    pub departure: Timestamp,
    pub seat_price: f64,
    pub created_by: String,
}

/// Schedules, cancels, and advances cruises against the fleet database.
pub struct Scheduler<'a> {
    storage: &'a mut Storage,
}

impl<'a> Scheduler<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Validates and creates a cruise, returning its id.
    ///
    /// Preconditions are checked in order: non-negative price, active
    /// spaceship, active departure and arrival destinations, distinct
    /// destinations, existing ship model. Duration is derived from the
    /// destinations' distance scalars and the model's cruise speed, and the
    /// spaceship must have no non-cancelled cruise overlapping (inclusive
    /// boundaries) the derived busy interval.
    pub fn create_cruise(&mut self, req: &NewCruise) -> Result<i64> {
        if req.seat_price.is_nan() || req.seat_price < 0.0 {
            return Err(ScheduleError::NegativeSeatPrice);
        }

        let (conn, statuses) = self.storage.parts_mut();
        let tx = conn.transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)
            .map_err(StorageError::from)?;

        let spaceship = catalog::spaceship_by_id(&tx, req.spaceship_id)?
            .filter(|s| s.active)
            .ok_or(ScheduleError::SpaceshipUnavailable(req.spaceship_id))?;

        let departure_dest = catalog::destination_by_id(&tx, req.departure_destination_id)?
            .filter(|d| d.active)
            .ok_or(ScheduleError::DepartureUnavailable(req.departure_destination_id))?;

        let arrival_dest = catalog::destination_by_id(&tx, req.arrival_destination_id)?
            .filter(|d| d.active)
            .ok_or(ScheduleError::ArrivalUnavailable(req.arrival_destination_id))?;

        if req.departure_destination_id == req.arrival_destination_id {
            return Err(ScheduleError::SameDestination);
        }

        let model = catalog::ship_model_by_id(&tx, spaceship.model_id)?.ok_or(
            ScheduleError::ModelMissing {
                spaceship: spaceship.id,
                model: spaceship.model_id,
            },
        )?;

        let duration_minutes = travel_minutes(
            departure_dest.distance_from_origin_km,
            arrival_dest.distance_from_origin_km,
            model.cruise_speed_kmph,
        );
        let arrival = req
            .departure
            .saturating_add(SignedDuration::from_mins(duration_minutes))
            .expect("saturating_add with a SignedDuration is infallible");

        let overlapping =
            cruise::overlapping_for_spaceship(&tx, statuses, spaceship.id, req.departure, arrival)?;
        if !overlapping.is_empty() {
            return Err(ScheduleError::Conflict(spaceship.id));
        }

        // Backdated creation lands directly in a consistent historical state.
        let status = initial_status(req.departure, arrival, Timestamp::now());

        let id = cruise::insert(
            &tx,
            statuses,
            &NewCruiseRow {
                spaceship_id: req.spaceship_id,
                departure_destination_id: req.departure_destination_id,
                arrival_destination_id: req.arrival_destination_id,
                departure: req.departure,
                duration_minutes,
                seat_price: req.seat_price,
                status,
                created_by: &req.created_by,
            },
        )?;

        tx.commit().map_err(StorageError::from)?;
        Ok(id)
    }

    /// Cancels a scheduled cruise.
    ///
    /// Returns `Ok(false)` if the cruise does not exist, so callers can tell
    /// "not found" from "not cancellable". In-progress and completed cruises
    /// cannot be cancelled.
    pub fn cancel_cruise(&mut self, id: i64) -> Result<bool> {
        let (conn, statuses) = self.storage.parts_mut();
        let tx = conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)
            .map_err(StorageError::from)?;

        let Some(existing) = cruise::by_id(&tx, statuses, id)? else {
            return Ok(false);
        };
        if existing.status != CruiseStatus::Scheduled {
            return Err(ScheduleError::NotCancellable {
                id,
                status: existing.status,
            });
        }

        cruise::update_status(&tx, statuses, id, CruiseStatus::Cancelled)?;
        tx.commit().map_err(StorageError::from)?;
        Ok(true)
    }

    /// Advances cruise statuses against the current time, returning the
    /// number of transitions applied.
    ///
    /// Scheduled cruises whose departure has passed become in-progress (or
    /// completed outright when the arrival has passed too, so a second sweep
    /// with no elapsed time applies nothing); in-progress cruises whose
    /// arrival has passed become completed. All transitions of one pass
    /// commit or roll back together.
    pub fn advance_statuses(&mut self) -> Result<usize> {
        let now = Timestamp::now();
        let (conn, statuses) = self.storage.parts_mut();
        let tx = conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)
            .map_err(StorageError::from)?;

        let mut transitions = 0;

        for scheduled in cruise::with_status(&tx, statuses, CruiseStatus::Scheduled)? {
            let next = if scheduled.arrival() <= now {
                CruiseStatus::Completed
            } else if scheduled.departure <= now {
                CruiseStatus::InProgress
            } else {
                continue;
            };
            cruise::update_status(&tx, statuses, scheduled.id, next)?;
            transitions += 1;
        }

        for in_progress in cruise::with_status(&tx, statuses, CruiseStatus::InProgress)? {
            if in_progress.arrival() <= now {
                cruise::update_status(&tx, statuses, in_progress.id, CruiseStatus::Completed)?;
                transitions += 1;
            }
        }

        tx.commit().map_err(StorageError::from)?;
        Ok(transitions)
    }

    // Reads. Every read sweeps statuses first so results are current as of
    // the call.

    pub fn cruise(&mut self, id: i64) -> Result<Option<Cruise>> {
        self.advance_statuses()?;
        Ok(cruise::by_id(self.storage.conn(), self.storage.statuses(), id)?)
    }

    pub fn cruises_for_spaceship(&mut self, spaceship_id: i64) -> Result<Vec<Cruise>> {
        self.advance_statuses()?;
        Ok(cruise::for_spaceship(self.storage.conn(), self.storage.statuses(), spaceship_id)?)
    }

    pub fn cruises_with_status(&mut self, status: CruiseStatus) -> Result<Vec<Cruise>> {
        self.advance_statuses()?;
        Ok(cruise::with_status(self.storage.conn(), self.storage.statuses(), status)?)
    }

    /// Cruises departing within `[start, end]`.
    pub fn cruises_between(&mut self, start: Timestamp, end: Timestamp) -> Result<Vec<Cruise>> {
        if start >= end {
            return Err(ScheduleError::InvalidRange);
        }
        self.advance_statuses()?;
        Ok(cruise::departing_between(self.storage.conn(), self.storage.statuses(), start, end)?)
    }

    pub fn cruises_created_by(&mut self, identity: &str) -> Result<Vec<Cruise>> {
        self.advance_statuses()?;
        Ok(cruise::created_by(self.storage.conn(), self.storage.statuses(), identity)?)
    }

    pub fn search(&mut self, filter: &CruiseFilter) -> Result<Vec<Cruise>> {
        self.advance_statuses()?;
        Ok(cruise::search(self.storage.conn(), self.storage.statuses(), filter)?)
    }
}

/// Travel time in minutes between two distance scalars at a given speed.
///
/// Distances are one-dimensional offsets from a common origin, so the travel
/// distance is their absolute difference. Rounded up to whole minutes and
/// never less than one minute, since every cruise occupies its spaceship for
/// some time. Speed is positive by schema constraint.
fn travel_minutes(from_km: i64, to_km: i64, speed_kmph: i64) -> i64 {
    let distance_km = from_km.abs_diff(to_km);
    let minutes = distance_km.saturating_mul(60).div_ceil(speed_kmph.unsigned_abs());
    i64::try_from(minutes).unwrap_or(i64::MAX).max(1)
}

/// Initial lifecycle state for a cruise created at `now`.
fn initial_status(departure: Timestamp, arrival: Timestamp, now: Timestamp) -> CruiseStatus {
    if departure > now {
        CruiseStatus::Scheduled
    } else if arrival > now {
        CruiseStatus::InProgress
    } else {
        CruiseStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::interval::TimeSlot;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn mins_from_now(minutes: i64) -> Timestamp {
        Timestamp::now()
            .saturating_add(SignedDuration::from_mins(minutes))
            .expect("saturating_add with a SignedDuration is infallible")
    }

    /// Storage seeded with one 40 000 kmph model, one spaceship, and
    /// destinations at 0, 40 000, and 80 000 km: one hour of travel between
    /// adjacent ones.
    fn seeded_storage() -> (Storage, Fixture) {
        let storage = Storage::open_in_memory().unwrap();
        let conn = storage.conn();
        let model = catalog::insert_ship_model(conn, "Starliner", 120, 40_000).unwrap();
        let ship = catalog::insert_spaceship(conn, model).unwrap();
        let origin = catalog::insert_destination(conn, "Origin Station", 0).unwrap();
        let near = catalog::insert_destination(conn, "Near Waypoint", 40_000).unwrap();
        let far = catalog::insert_destination(conn, "Far Waypoint", 80_000).unwrap();
        (
            storage,
            Fixture {
                ship,
                origin,
                near,
                far,
            },
        )
    }

    struct Fixture {
        ship: i64,
        origin: i64,
        near: i64,
        far: i64,
    }

    fn request(f: &Fixture, from: i64, to: i64, departure: Timestamp) -> NewCruise {
        NewCruise {
            spaceship_id: f.ship,
            departure_destination_id: from,
            arrival_destination_id: to,
            departure,
            seat_price: 99.0,
            created_by: "ops".into(),
        }
    }

    #[test]
    fn derives_duration_from_distance_and_speed() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        // 80 000 km at 40 000 kmph = 120 minutes.
        let id = scheduler
            .create_cruise(&request(&f, f.origin, f.far, mins_from_now(60)))
            .unwrap();
        let cruise = scheduler.cruise(id).unwrap().unwrap();
        assert_eq!(cruise.duration_minutes, 120);
        assert_eq!(cruise.status, CruiseStatus::Scheduled);
    }

    #[test]
    fn duration_rounds_up_to_whole_minutes() {
        let (mut storage, f) = seeded_storage();
        let odd = catalog::insert_destination(storage.conn(), "Odd Waypoint", 41_000).unwrap();
        let mut scheduler = Scheduler::new(&mut storage);

        // 41 000 km at 40 000 kmph = 61.5 minutes, rounded up to 62.
        let id = scheduler
            .create_cruise(&request(&f, f.origin, odd, mins_from_now(60)))
            .unwrap();
        let cruise = scheduler.cruise(id).unwrap().unwrap();
        assert_eq!(cruise.duration_minutes, 62);
    }

    #[test]
    fn zero_distance_pair_still_occupies_one_minute() {
        let (mut storage, f) = seeded_storage();
        let twin = catalog::insert_destination(storage.conn(), "Near Twin", 40_000).unwrap();
        let mut scheduler = Scheduler::new(&mut storage);

        let id = scheduler
            .create_cruise(&request(&f, f.near, twin, mins_from_now(60)))
            .unwrap();
        let cruise = scheduler.cruise(id).unwrap().unwrap();
        assert_eq!(cruise.duration_minutes, 1);
    }

    #[test]
    fn rejects_negative_price_and_same_destination() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        let mut req = request(&f, f.origin, f.near, mins_from_now(60));
        req.seat_price = -1.0;
        assert!(matches!(
            scheduler.create_cruise(&req).unwrap_err(),
            ScheduleError::NegativeSeatPrice
        ));

        let req = request(&f, f.near, f.near, mins_from_now(60));
        assert!(matches!(
            scheduler.create_cruise(&req).unwrap_err(),
            ScheduleError::SameDestination
        ));
    }

    #[test]
    fn rejects_missing_or_inactive_references() {
        let (mut storage, f) = seeded_storage();
        catalog::set_destination_active(storage.conn(), f.far, false).unwrap();
        let mut scheduler = Scheduler::new(&mut storage);

        let mut req = request(&f, f.origin, f.near, mins_from_now(60));
        req.spaceship_id = 999;
        assert!(matches!(
            scheduler.create_cruise(&req).unwrap_err(),
            ScheduleError::SpaceshipUnavailable(999)
        ));

        let req = request(&f, f.far, f.near, mins_from_now(60));
        assert!(matches!(
            scheduler.create_cruise(&req).unwrap_err(),
            ScheduleError::DepartureUnavailable(_)
        ));

        let req = request(&f, f.near, f.far, mins_from_now(60));
        assert!(matches!(
            scheduler.create_cruise(&req).unwrap_err(),
            ScheduleError::ArrivalUnavailable(_)
        ));
    }

    #[test]
    fn rejects_inactive_spaceship() {
        let (mut storage, f) = seeded_storage();
        catalog::set_spaceship_active(storage.conn(), f.ship, false).unwrap();
        let mut scheduler = Scheduler::new(&mut storage);

        let err = scheduler
            .create_cruise(&request(&f, f.origin, f.near, mins_from_now(60)))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::SpaceshipUnavailable(_)));
    }

    #[test]
    fn back_to_back_cruises_conflict() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        // One hour cruise departing in an hour.
        let departure = mins_from_now(60);
        scheduler
            .create_cruise(&request(&f, f.origin, f.near, departure))
            .unwrap();

        // Departing exactly at the first cruise's arrival: inclusive overlap.
        let touching = departure
            .saturating_add(SignedDuration::from_mins(60))
            .expect("saturating_add with a SignedDuration is infallible");
        let err = scheduler
            .create_cruise(&request(&f, f.near, f.far, touching))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Conflict(_)));

        // One minute later is clear.
        let clear = departure
            .saturating_add(SignedDuration::from_mins(61))
            .expect("saturating_add with a SignedDuration is infallible");
        scheduler
            .create_cruise(&request(&f, f.near, f.far, clear))
            .unwrap();
    }

    #[test]
    fn cancelled_cruise_frees_its_window() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        let departure = mins_from_now(60);
        let first = scheduler
            .create_cruise(&request(&f, f.origin, f.near, departure))
            .unwrap();
        assert!(scheduler.cancel_cruise(first).unwrap());

        // Same window, now free.
        scheduler
            .create_cruise(&request(&f, f.origin, f.near, departure))
            .unwrap();
    }

    #[test]
    fn no_overlapping_pair_survives_a_create_cancel_sequence() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        let base = mins_from_now(60);
        for offset in [0, 30, 61, 90, 122, 200] {
            let departure = base
                .saturating_add(SignedDuration::from_mins(offset))
                .expect("saturating_add with a SignedDuration is infallible");
            // Some of these conflict and are rejected; that's the point.
            let _ = scheduler.create_cruise(&request(&f, f.origin, f.near, departure));
        }
        let first = scheduler.cruises_for_spaceship(f.ship).unwrap()[0].id;
        let _ = scheduler.cancel_cruise(first);

        let cruises = scheduler.cruises_for_spaceship(f.ship).unwrap();
        let live: Vec<TimeSlot> = cruises
            .iter()
            .filter(|c| c.status != CruiseStatus::Cancelled)
            .map(Cruise::busy_interval)
            .collect();
        for (i, a) in live.iter().enumerate() {
            for b in &live[i + 1..] {
                assert!(!a.overlaps_inclusive(b), "overlapping cruises persisted");
            }
        }
    }

    #[test]
    fn backdated_creation_lands_in_historical_state() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        // Departed two hours ago, one hour of travel: already completed.
        let completed = scheduler
            .create_cruise(&request(&f, f.origin, f.near, mins_from_now(-120)))
            .unwrap();
        let cruise = scheduler.cruise(completed).unwrap().unwrap();
        assert_eq!(cruise.status, CruiseStatus::Completed);

        // Departed half an hour ago, still travelling.
        let underway = scheduler
            .create_cruise(&request(&f, f.origin, f.near, mins_from_now(-30)))
            .unwrap();
        let cruise = scheduler.cruise(underway).unwrap().unwrap();
        assert_eq!(cruise.status, CruiseStatus::InProgress);
    }

    #[test]
    fn cancel_rules() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        // Missing cruise: false, not an error.
        assert!(!scheduler.cancel_cruise(404).unwrap());

        // In-progress cruise: state error.
        let underway = scheduler
            .create_cruise(&request(&f, f.origin, f.near, mins_from_now(-30)))
            .unwrap();
        let err = scheduler.cancel_cruise(underway).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::NotCancellable {
                status: CruiseStatus::InProgress,
                ..
            }
        ));

        // Scheduled cruise: cancelled.
        let scheduled = scheduler
            .create_cruise(&request(&f, f.near, f.far, mins_from_now(60)))
            .unwrap();
        assert!(scheduler.cancel_cruise(scheduled).unwrap());
        let cruise = scheduler.cruise(scheduled).unwrap().unwrap();
        assert_eq!(cruise.status, CruiseStatus::Cancelled);
    }

    #[test]
    fn sweep_advances_and_is_idempotent() {
        let (mut storage, f) = seeded_storage();

        // Insert rows directly so they start Scheduled despite being in the
        // past, as if time passed since creation.
        let departed = cruise::insert(
            storage.conn(),
            storage.statuses(),
            &crate::storage::NewCruiseRow {
                spaceship_id: f.ship,
                departure_destination_id: f.origin,
                arrival_destination_id: f.near,
                departure: mins_from_now(-30),
                duration_minutes: 60,
                seat_price: 99.0,
                status: CruiseStatus::Scheduled,
                created_by: "ops",
            },
        )
        .unwrap();
        let long_gone = cruise::insert(
            storage.conn(),
            storage.statuses(),
            &crate::storage::NewCruiseRow {
                spaceship_id: f.ship,
                departure_destination_id: f.near,
                arrival_destination_id: f.far,
                departure: mins_from_now(-300),
                duration_minutes: 60,
                seat_price: 99.0,
                status: CruiseStatus::Scheduled,
                created_by: "ops",
            },
        )
        .unwrap();
        let future = cruise::insert(
            storage.conn(),
            storage.statuses(),
            &crate::storage::NewCruiseRow {
                spaceship_id: f.ship,
                departure_destination_id: f.far,
                arrival_destination_id: f.origin,
                departure: mins_from_now(60),
                duration_minutes: 120,
                seat_price: 99.0,
                status: CruiseStatus::Scheduled,
                created_by: "ops",
            },
        )
        .unwrap();

        let mut scheduler = Scheduler::new(&mut storage);
        let transitions = scheduler.advance_statuses().unwrap();
        assert_eq!(transitions, 2);

        let status = |scheduler: &mut Scheduler<'_>, id| scheduler.cruise(id).unwrap().unwrap().status;
        assert_eq!(status(&mut scheduler, departed), CruiseStatus::InProgress);
        // Went straight to completed, not through a second pass.
        assert_eq!(status(&mut scheduler, long_gone), CruiseStatus::Completed);
        assert_eq!(status(&mut scheduler, future), CruiseStatus::Scheduled);

        // No time elapsed (within the departed cruise's hour): nothing more.
        assert_eq!(scheduler.advance_statuses().unwrap(), 0);
    }

    #[test]
    fn reads_sweep_before_returning() {
        let (mut storage, f) = seeded_storage();
        cruise::insert(
            storage.conn(),
            storage.statuses(),
            &crate::storage::NewCruiseRow {
                spaceship_id: f.ship,
                departure_destination_id: f.origin,
                arrival_destination_id: f.near,
                departure: mins_from_now(-30),
                duration_minutes: 60,
                seat_price: 99.0,
                status: CruiseStatus::Scheduled,
                created_by: "ops",
            },
        )
        .unwrap();

        let mut scheduler = Scheduler::new(&mut storage);
        let in_progress = scheduler.cruises_with_status(CruiseStatus::InProgress).unwrap();
        assert_eq!(in_progress.len(), 1);
    }

    #[test]
    fn cruises_between_and_created_by() {
        let (mut storage, f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        let departure = mins_from_now(60);
        scheduler
            .create_cruise(&request(&f, f.origin, f.near, departure))
            .unwrap();

        let window_start = mins_from_now(30);
        let window_end = mins_from_now(90);
        let within = scheduler.cruises_between(window_start, window_end).unwrap();
        assert_eq!(within.len(), 1);

        assert_eq!(scheduler.cruises_created_by("ops").unwrap().len(), 1);
        assert!(scheduler.cruises_created_by("nobody").unwrap().is_empty());
    }

    #[test]
    fn cruises_between_validates_range() {
        let (mut storage, _f) = seeded_storage();
        let mut scheduler = Scheduler::new(&mut storage);

        let err = scheduler
            .cruises_between(ts("2026-03-02T00:00:00Z"), ts("2026-03-01T00:00:00Z"))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidRange));
    }

    #[test]
    fn initial_status_rules() {
        let now = ts("2026-03-01T12:00:00Z");
        let hour = SignedDuration::from_hours(1);

        assert_eq!(initial_status(now + hour, now + hour + hour, now), CruiseStatus::Scheduled);
        assert_eq!(initial_status(now - hour, now + hour, now), CruiseStatus::InProgress);
        assert_eq!(initial_status(now - hour - hour, now - hour, now), CruiseStatus::Completed);
        // Boundary: departing exactly now is already underway.
        assert_eq!(initial_status(now, now + hour, now), CruiseStatus::InProgress);
        // Boundary: arriving exactly now is already complete.
        assert_eq!(initial_status(now - hour, now, now), CruiseStatus::Completed);
    }

    #[test]
    fn travel_minutes_formula() {
        assert_eq!(travel_minutes(0, 40_000, 40_000), 60);
        assert_eq!(travel_minutes(40_000, 0, 40_000), 60);
        assert_eq!(travel_minutes(0, 41_000, 40_000), 62);
        assert_eq!(travel_minutes(1_000, 1_000, 40_000), 1);
        assert_eq!(travel_minutes(0, 1, 40_000), 1);
    }
}
