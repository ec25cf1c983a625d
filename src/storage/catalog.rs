//! Catalog storage: ship models, spaceships, and destinations.
//!
//! The scheduler only reads these; the CLI maintains them. Catalog rows are
//! deactivated rather than deleted, since cruises keep referencing them.

use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{Destination, ShipModel, Spaceship};

use super::Result;

// ── Ship models ──

pub fn insert_ship_model(conn: &Connection, name: &str, capacity: i64, speed_kmph: i64) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO ship_models (name, capacity, cruise_speed_kmph)
         VALUES (?1, ?2, ?3)
         RETURNING model_id",
        params![name, capacity, speed_kmph],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn ship_model_by_id(conn: &Connection, id: i64) -> Result<Option<ShipModel>> {
    let model = conn
        .query_row(
            "SELECT model_id, name, capacity, cruise_speed_kmph FROM ship_models WHERE model_id = ?1",
            [id],
            ship_model_from_row,
        )
        .optional()?;
    Ok(model)
}

pub fn list_ship_models(conn: &Connection) -> Result<Vec<ShipModel>> {
    let mut stmt =
        conn.prepare("SELECT model_id, name, capacity, cruise_speed_kmph FROM ship_models ORDER BY model_id")?;
    let rows = stmt.query_map([], ship_model_from_row)?;
    Ok(rows.collect::<core::result::Result<Vec<_>, _>>()?)
}

fn ship_model_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ShipModel> {
    Ok(ShipModel {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
        cruise_speed_kmph: row.get(3)?,
    })
}

// ── Spaceships ──

pub fn insert_spaceship(conn: &Connection, model_id: i64) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO spaceships (model_id, is_active) VALUES (?1, 1) RETURNING spaceship_id",
        [model_id],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn spaceship_by_id(conn: &Connection, id: i64) -> Result<Option<Spaceship>> {
    let ship = conn
        .query_row(
            "SELECT spaceship_id, model_id, is_active FROM spaceships WHERE spaceship_id = ?1",
            [id],
            spaceship_from_row,
        )
        .optional()?;
    Ok(ship)
}

pub fn list_spaceships(conn: &Connection) -> Result<Vec<Spaceship>> {
    let mut stmt =
        conn.prepare("SELECT spaceship_id, model_id, is_active FROM spaceships ORDER BY spaceship_id")?;
    let rows = stmt.query_map([], spaceship_from_row)?;
    Ok(rows.collect::<core::result::Result<Vec<_>, _>>()?)
}

/// Active spaceships in id order. The availability calculator walks these.
pub fn active_spaceships(conn: &Connection) -> Result<Vec<Spaceship>> {
    let mut stmt = conn.prepare(
        "SELECT spaceship_id, model_id, is_active FROM spaceships WHERE is_active = 1 ORDER BY spaceship_id",
    )?;
    let rows = stmt.query_map([], spaceship_from_row)?;
    Ok(rows.collect::<core::result::Result<Vec<_>, _>>()?)
}

/// Returns `false` if the spaceship does not exist.
pub fn set_spaceship_active(conn: &Connection, id: i64, active: bool) -> Result<bool> {
    let rows = conn.execute(
        "UPDATE spaceships SET is_active = ?1 WHERE spaceship_id = ?2",
        params![active, id],
    )?;
    Ok(rows > 0)
}

fn spaceship_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Spaceship> {
    Ok(Spaceship {
        id: row.get(0)?,
        model_id: row.get(1)?,
        active: row.get(2)?,
    })
}

// ── Destinations ──

pub fn insert_destination(conn: &Connection, name: &str, distance_from_origin_km: i64) -> Result<i64> {
    let id = conn.query_row(
        "INSERT INTO destinations (name, distance_from_origin_km, is_active)
         VALUES (?1, ?2, 1)
         RETURNING destination_id",
        params![name, distance_from_origin_km],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn destination_by_id(conn: &Connection, id: i64) -> Result<Option<Destination>> {
    let destination = conn
        .query_row(
            "SELECT destination_id, name, distance_from_origin_km, is_active
             FROM destinations WHERE destination_id = ?1",
            [id],
            destination_from_row,
        )
        .optional()?;
    Ok(destination)
}

pub fn list_destinations(conn: &Connection) -> Result<Vec<Destination>> {
    let mut stmt = conn.prepare(
        "SELECT destination_id, name, distance_from_origin_km, is_active
         FROM destinations ORDER BY destination_id",
    )?;
    let rows = stmt.query_map([], destination_from_row)?;
    Ok(rows.collect::<core::result::Result<Vec<_>, _>>()?)
}

/// Returns `false` if the destination does not exist.
pub fn set_destination_active(conn: &Connection, id: i64, active: bool) -> Result<bool> {
    let rows = conn.execute(
        "UPDATE destinations SET is_active = ?1 WHERE destination_id = ?2",
        params![active, id],
    )?;
    Ok(rows > 0)
}

fn destination_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Destination> {
    Ok(Destination {
        id: row.get(0)?,
        name: row.get(1)?,
        distance_from_origin_km: row.get(2)?,
        active: row.get(3)?,
    })
}
