//! Key/value slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and overwrite named string slots in the `kv_slots` table.
//!
//! # Invariants
//! - `write_slot` is an upsert: the previous value is replaced in one
//!   statement and the slot's `write_count` increases by one.
//! - A full disk or a read-only database surfaces as `RepoError::Rejected`;
//!   every other SQLite failure stays `RepoError::Db`.
//!
//! # Diagnostics
//! - `write_count` counts persisted saves per slot. Every user action
//!   should add exactly one; a larger jump means a caller is saving more
//!   often than it mutates.

use crate::db::{DbError, DbResult};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Slot storage failure.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The backing store refused the write (quota, read-only media, ...).
    Rejected(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Rejected(reason) => write!(f, "slot write rejected: {reason}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable named-slot storage.
pub trait SlotStore {
    /// Returns the slot value, or `None` when the key was never written.
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>>;
    /// Replaces the slot value.
    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed slot store.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Wraps a migrated connection, checking that the slot table exists.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        conn.query_row("SELECT COUNT(*) FROM kv_slots;", [], |row| row.get::<_, i64>(0))?;
        Ok(Self { conn })
    }

    /// Number of saves recorded for `key`; `0` when it was never written.
    pub fn write_count(&self, key: &str) -> RepoResult<u64> {
        let count = self
            .conn
            .query_row(
                "SELECT write_count FROM kv_slots WHERE slot_key = ?1;",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(count.map_or(0, |value| u64::try_from(value).unwrap_or(0)))
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE slot_key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (slot_key, value, write_count)
             VALUES (?1, ?2, 1)
             ON CONFLICT(slot_key) DO UPDATE SET
                value = excluded.value,
                write_count = kv_slots.write_count + 1,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )
        .map(|_| ())
        .map_err(map_write_error)
    }
}

fn map_write_error(err: rusqlite::Error) -> RepoError {
    match err.sqlite_error_code() {
        Some(ErrorCode::DiskFull | ErrorCode::ReadOnly) => RepoError::Rejected(err.to_string()),
        _ => RepoError::from(err),
    }
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).read_slot(key)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).write_slot(key, value)
    }
}
