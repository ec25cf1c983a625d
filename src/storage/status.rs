//! The cruise status registry: name→id resolution with a process-lifetime
//! cache.
//!
//! Status rows are immutable reference data, so resolved ids are cached in a
//! `OnceLock` and never invalidated. Resolution is idempotent: a race between
//! threads loads the same values, and whichever initialization wins is
//! indistinguishable from the other.

use std::sync::OnceLock;

use rusqlite::{Connection, OptionalExtension};

use crate::model::CruiseStatus;

use super::{Result, StorageError};

/// Resolved row ids for the four canonical statuses.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusIds {
    scheduled: i64,
    in_progress: i64,
    completed: i64,
    cancelled: i64,
}

impl StatusIds {
    pub fn id_of(&self, status: CruiseStatus) -> i64 {
        match status {
            CruiseStatus::Scheduled => self.scheduled,
            CruiseStatus::InProgress => self.in_progress,
            CruiseStatus::Completed => self.completed,
            CruiseStatus::Cancelled => self.cancelled,
        }
    }

    pub fn status_of(&self, id: i64) -> Option<CruiseStatus> {
        CruiseStatus::ALL.into_iter().find(|s| self.id_of(*s) == id)
    }
}

/// Caches the id of each canonical status after first resolution.
///
/// The four rows must exist before the engine can operate; a missing row is
/// a fatal configuration error, surfaced as [`StorageError::StatusMissing`].
#[derive(Debug, Default)]
pub struct StatusRegistry {
    ids: OnceLock<StatusIds>,
}

impl StatusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted id for a status, resolving and caching on first use.
    pub fn id_of(&self, conn: &Connection, status: CruiseStatus) -> Result<i64> {
        Ok(self.ids(conn)?.id_of(status))
    }

    /// The status for a persisted id. A cruise row pointing at an unknown
    /// status id is corrupt.
    pub fn status_of(&self, conn: &Connection, id: i64) -> Result<CruiseStatus> {
        self.ids(conn)?
            .status_of(id)
            .ok_or_else(|| StorageError::Corrupt(format!("unknown cruise status id: {id}")))
    }

    pub(crate) fn ids(&self, conn: &Connection) -> Result<&StatusIds> {
        if let Some(ids) = self.ids.get() {
            return Ok(ids);
        }
        let loaded = StatusIds {
            scheduled: resolve(conn, CruiseStatus::Scheduled)?,
            in_progress: resolve(conn, CruiseStatus::InProgress)?,
            completed: resolve(conn, CruiseStatus::Completed)?,
            cancelled: resolve(conn, CruiseStatus::Cancelled)?,
        };
        // A concurrent initialization may have won; both loaded the same rows.
        Ok(self.ids.get_or_init(|| loaded))
    }
}

fn resolve(conn: &Connection, status: CruiseStatus) -> Result<i64> {
    conn.query_row(
        "SELECT cruise_status_id FROM cruise_statuses WHERE status_name = ?1",
        [status.name()],
        |row| row.get(0),
    )
    .optional()?
    .ok_or(StorageError::StatusMissing(status.name()))
}
