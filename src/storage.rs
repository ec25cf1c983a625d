//! SQLite persistence for the fleet schedule.
//!
//! One database file holds the whole fleet: catalog tables (ship models,
//! spaceships, destinations), the `cruise_statuses` reference table, and the
//! cruises themselves. The schema is created idempotently at open and the
//! four canonical status rows are seeded.
//!
//! Row-level functions live in the submodules and take a plain
//! [`rusqlite::Connection`], so they compose equally inside a transaction
//! (which derefs to a connection) or outside one. [`Storage`] owns the
//! connection and the status registry; mutating engine operations split the
//! two with [`Storage::parts_mut`] and open an immediate transaction so the
//! read-then-write sequence holds the write lock for its whole duration.

pub mod catalog;
pub mod cruise;
mod status;

use std::path::{Path, PathBuf};
use std::{fs, io};

use jiff::Timestamp;
use rusqlite::Connection;

pub use cruise::{CruiseFilter, NewCruiseRow};
pub use status::StatusRegistry;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cruise status '{0}' is missing from the database")]
    StatusMissing(&'static str),

    #[error("corrupt row: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS ship_models (
    model_id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name              TEXT NOT NULL UNIQUE,
    capacity          INTEGER NOT NULL,
    cruise_speed_kmph INTEGER NOT NULL CHECK (cruise_speed_kmph > 0)
);

CREATE TABLE IF NOT EXISTS spaceships (
    spaceship_id INTEGER PRIMARY KEY AUTOINCREMENT,
    model_id     INTEGER NOT NULL REFERENCES ship_models (model_id),
    is_active    INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS destinations (
    destination_id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name                    TEXT NOT NULL UNIQUE,
    distance_from_origin_km INTEGER NOT NULL,
    is_active               INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS cruise_statuses (
    cruise_status_id INTEGER PRIMARY KEY AUTOINCREMENT,
    status_name      TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS cruises (
    cruise_id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    spaceship_id               INTEGER NOT NULL REFERENCES spaceships (spaceship_id),
    departure_destination_id   INTEGER NOT NULL REFERENCES destinations (destination_id),
    arrival_destination_id     INTEGER NOT NULL REFERENCES destinations (destination_id),
    departure_unix             INTEGER NOT NULL,
    duration_minutes           INTEGER NOT NULL CHECK (duration_minutes > 0),
    seat_price                 REAL NOT NULL,
    cruise_status_id           INTEGER NOT NULL REFERENCES cruise_statuses (cruise_status_id),
    created_by                 TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_cruises_spaceship ON cruises (spaceship_id);
CREATE INDEX IF NOT EXISTS idx_cruises_status ON cruises (cruise_status_id);

INSERT OR IGNORE INTO cruise_statuses (status_name)
VALUES ('Scheduled'), ('In Progress'), ('Completed'), ('Cancelled');
";

/// Handle to the fleet database.
pub struct Storage {
    conn: Connection,
    statuses: StatusRegistry,
}

impl Storage {
    /// Opens (creating if needed) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    /// Opens a fresh in-memory database. Used by tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Returns the default database path: `~/.starlane/fleet.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".starlane").join("fleet.sqlite"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn,
            statuses: StatusRegistry::new(),
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn statuses(&self) -> &StatusRegistry {
        &self.statuses
    }

    /// Splits the handle for transactional work: `Connection::transaction*`
    /// needs `&mut`, while the status registry is only read.
    pub fn parts_mut(&mut self) -> (&mut Connection, &StatusRegistry) {
        (&mut self.conn, &self.statuses)
    }
}

/// Timestamps persist as unix seconds so SQL range and overlap predicates
/// stay integer arithmetic. Sub-second precision is truncated.
pub(crate) fn ts_to_unix(ts: Timestamp) -> i64 {
    ts.as_second()
}

pub(crate) fn ts_from_unix(seconds: i64) -> Result<Timestamp> {
    Timestamp::from_second(seconds)
        .map_err(|e| StorageError::Corrupt(format!("invalid timestamp {seconds}: {e}")))
}
