//! Database layer for the clinic.

mod schema;
mod appointments;
mod clients;
mod medicines;
mod pets;
mod products;
mod providers;
mod vets;

pub use schema::*;

use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

use crate::config::DatabaseLocation;
use crate::models::{RecordId, RecordKind};

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        tracing::debug!(path = %path.as_ref().display(), "opening clinic database");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        tracing::debug!("opening in-memory clinic database");
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Open whatever the configuration points at.
    pub fn open_location(location: &DatabaseLocation) -> DbResult<Self> {
        match location {
            DatabaseLocation::InMemory => Self::open_in_memory(),
            DatabaseLocation::File(path) => Self::open(path),
        }
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Check whether a record of `kind` exists.
    pub fn exists(&self, kind: RecordKind, id: RecordId) -> DbResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", kind.table());
        let found = self
            .conn
            .query_row(&sql, [id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// Delete a record; dependent rows go with it through `ON DELETE CASCADE`.
    pub fn delete_record(&self, kind: RecordKind, id: RecordId) -> DbResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        let rows_affected = self.conn.execute(&sql, [id])?;
        Ok(rows_affected > 0)
    }

    /// Count records of `kind`.
    pub fn count_records(&self, kind: RecordKind) -> DbResult<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Map a constraint failure to [`DbError::Constraint`], keeping other errors as-is.
pub(crate) fn constraint_or_sqlite(err: rusqlite::Error) -> DbError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, ref msg)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            DbError::Constraint(msg.clone().unwrap_or_else(|| e.to_string()))
        }
        other => DbError::Sqlite(other),
    }
}
