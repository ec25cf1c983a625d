//! Cruise storage: insert, status updates, and the schedule queries.
//!
//! The status enum is translated to and from its row id here, at the
//! persistence edge; everything above this module works with
//! [`CruiseStatus`] directly.

use jiff::Timestamp;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, named_params, params, params_from_iter};

use crate::model::{Cruise, CruiseStatus};

use super::status::StatusIds;
use super::{Result, StatusRegistry, ts_from_unix, ts_to_unix};

const COLUMNS: &str = "cruise_id, spaceship_id, departure_destination_id, arrival_destination_id, \
     departure_unix, duration_minutes, seat_price, cruise_status_id, created_by";

/// Inclusive-boundary overlap between a cruise's busy interval
/// `[departure, departure + duration]` and a query window `[:start, :end]`.
///
/// A boundary touch counts as overlapping: back-to-back cruises conflict.
/// This is the single spelling of the rule, shared by the scheduler's
/// conflict check and the availability calculator so the two cannot drift.
const OVERLAPS_WINDOW: &str =
    "departure_unix <= :end AND departure_unix + duration_minutes * 60 >= :start";

/// Field values for a cruise insert. The id is assigned by the database.
#[derive(Debug)]
pub struct NewCruiseRow<'a> {
    pub spaceship_id: i64,
    pub departure_destination_id: i64,
    pub arrival_destination_id: i64,
    pub departure: Timestamp,
    pub duration_minutes: i64,
    pub seat_price: f64,
    pub status: CruiseStatus,
    pub created_by: &'a str,
}

/// Optional filters for cruise search. `None` fields are unconstrained.
#[derive(Debug, Clone, Default)]
pub struct CruiseFilter {
    pub spaceship_id: Option<i64>,
    pub departure_destination_id: Option<i64>,
    pub arrival_destination_id: Option<i64>,
    pub departing_after: Option<Timestamp>,
    pub departing_before: Option<Timestamp>,
    pub status: Option<CruiseStatus>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub created_by: Option<String>,
}

pub fn insert(conn: &Connection, statuses: &StatusRegistry, row: &NewCruiseRow<'_>) -> Result<i64> {
    let status_id = statuses.id_of(conn, row.status)?;
    let id = conn.query_row(
        "INSERT INTO cruises (
             spaceship_id, departure_destination_id, arrival_destination_id,
             departure_unix, duration_minutes, seat_price, cruise_status_id, created_by)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         RETURNING cruise_id",
        params![
            row.spaceship_id,
            row.departure_destination_id,
            row.arrival_destination_id,
            ts_to_unix(row.departure),
            row.duration_minutes,
            row.seat_price,
            status_id,
            row.created_by,
        ],
        |r| r.get(0),
    )?;
    Ok(id)
}

/// Sets a cruise's status. Returns `false` if the cruise does not exist.
pub fn update_status(
    conn: &Connection,
    statuses: &StatusRegistry,
    id: i64,
    status: CruiseStatus,
) -> Result<bool> {
    let status_id = statuses.id_of(conn, status)?;
    let rows = conn.execute(
        "UPDATE cruises SET cruise_status_id = ?1 WHERE cruise_id = ?2",
        params![status_id, id],
    )?;
    Ok(rows > 0)
}

pub fn by_id(conn: &Connection, statuses: &StatusRegistry, id: i64) -> Result<Option<Cruise>> {
    let ids = statuses.ids(conn)?;
    let raw = conn
        .query_row(
            &format!("SELECT {COLUMNS} FROM cruises WHERE cruise_id = ?1"),
            [id],
            raw_from_row,
        )
        .optional()?;
    raw.map(|raw| decode(raw, ids)).transpose()
}

pub fn for_spaceship(conn: &Connection, statuses: &StatusRegistry, spaceship_id: i64) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    query_cruises(
        conn,
        ids,
        &format!("SELECT {COLUMNS} FROM cruises WHERE spaceship_id = ?1 ORDER BY departure_unix"),
        [spaceship_id],
    )
}

pub fn with_status(conn: &Connection, statuses: &StatusRegistry, status: CruiseStatus) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    query_cruises(
        conn,
        ids,
        &format!("SELECT {COLUMNS} FROM cruises WHERE cruise_status_id = ?1 ORDER BY cruise_id"),
        [ids.id_of(status)],
    )
}

/// Cruises departing within `[start, end]` (departure time, not overlap).
pub fn departing_between(
    conn: &Connection,
    statuses: &StatusRegistry,
    start: Timestamp,
    end: Timestamp,
) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    query_cruises(
        conn,
        ids,
        &format!(
            "SELECT {COLUMNS} FROM cruises
             WHERE departure_unix >= ?1 AND departure_unix <= ?2
             ORDER BY departure_unix"
        ),
        [ts_to_unix(start), ts_to_unix(end)],
    )
}

pub fn created_by(conn: &Connection, statuses: &StatusRegistry, identity: &str) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    query_cruises(
        conn,
        ids,
        &format!("SELECT {COLUMNS} FROM cruises WHERE created_by = ?1 ORDER BY departure_unix"),
        [identity],
    )
}

/// Non-cancelled cruises of a spaceship whose busy interval overlaps the
/// window, under [`OVERLAPS_WINDOW`] semantics.
pub fn overlapping_for_spaceship(
    conn: &Connection,
    statuses: &StatusRegistry,
    spaceship_id: i64,
    start: Timestamp,
    end: Timestamp,
) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    let sql = format!(
        "SELECT {COLUMNS} FROM cruises
         WHERE spaceship_id = :ship
         AND cruise_status_id != :cancelled
         AND {OVERLAPS_WINDOW}
         ORDER BY departure_unix"
    );
    query_cruises(
        conn,
        ids,
        &sql,
        named_params! {
            ":ship": spaceship_id,
            ":cancelled": ids.id_of(CruiseStatus::Cancelled),
            ":start": ts_to_unix(start),
            ":end": ts_to_unix(end),
        },
    )
}

/// Search with dynamic filters, matching rows against every present filter.
pub fn search(conn: &Connection, statuses: &StatusRegistry, filter: &CruiseFilter) -> Result<Vec<Cruise>> {
    let ids = statuses.ids(conn)?;
    let mut conditions: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(id) = filter.spaceship_id {
        conditions.push("spaceship_id = ?");
        values.push(Value::Integer(id));
    }
    if let Some(id) = filter.departure_destination_id {
        conditions.push("departure_destination_id = ?");
        values.push(Value::Integer(id));
    }
    if let Some(id) = filter.arrival_destination_id {
        conditions.push("arrival_destination_id = ?");
        values.push(Value::Integer(id));
    }
    if let Some(after) = filter.departing_after {
        conditions.push("departure_unix >= ?");
        values.push(Value::Integer(ts_to_unix(after)));
    }
    if let Some(before) = filter.departing_before {
        conditions.push("departure_unix <= ?");
        values.push(Value::Integer(ts_to_unix(before)));
    }
    if let Some(status) = filter.status {
        conditions.push("cruise_status_id = ?");
        values.push(Value::Integer(ids.id_of(status)));
    }
    if let Some(min) = filter.min_price {
        conditions.push("seat_price >= ?");
        values.push(Value::Real(min));
    }
    if let Some(max) = filter.max_price {
        conditions.push("seat_price <= ?");
        values.push(Value::Real(max));
    }
    if let Some(identity) = &filter.created_by {
        conditions.push("created_by = ?");
        values.push(Value::Text(identity.clone()));
    }

    let mut sql = format!("SELECT {COLUMNS} FROM cruises");
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY departure_unix");

    query_cruises(conn, ids, &sql, params_from_iter(values))
}

fn query_cruises<P: rusqlite::Params>(
    conn: &Connection,
    ids: &StatusIds,
    sql: &str,
    params: P,
) -> Result<Vec<Cruise>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, raw_from_row)?;
    let mut cruises = Vec::new();
    for raw in rows {
        cruises.push(decode(raw?, ids)?);
    }
    Ok(cruises)
}

/// Column values as stored, before timestamp and status decoding.
struct RawCruise {
    id: i64,
    spaceship_id: i64,
    departure_destination_id: i64,
    arrival_destination_id: i64,
    departure_unix: i64,
    duration_minutes: i64,
    seat_price: f64,
    status_id: i64,
    created_by: String,
}

fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawCruise> {
    Ok(RawCruise {
        id: row.get(0)?,
        spaceship_id: row.get(1)?,
        departure_destination_id: row.get(2)?,
        arrival_destination_id: row.get(3)?,
        departure_unix: row.get(4)?,
        duration_minutes: row.get(5)?,
        seat_price: row.get(6)?,
        status_id: row.get(7)?,
        created_by: row.get(8)?,
    })
}

fn decode(raw: RawCruise, ids: &StatusIds) -> Result<Cruise> {
    let status = ids.status_of(raw.status_id).ok_or_else(|| {
        super::StorageError::Corrupt(format!("unknown cruise status id: {}", raw.status_id))
    })?;
    Ok(Cruise {
        id: raw.id,
        spaceship_id: raw.spaceship_id,
        departure_destination_id: raw.departure_destination_id,
        arrival_destination_id: raw.arrival_destination_id,
        departure: ts_from_unix(raw.departure_unix)?,
        duration_minutes: raw.duration_minutes,
        seat_price: raw.seat_price,
        status,
        created_by: raw.created_by,
    })
}
