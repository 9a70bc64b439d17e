//! SQLite connection wrapper. One connection per CLI invocation.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::ready(Connection::open(Path::new(path))?)
    }

    /// Throwaway database with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        Self::ready(Connection::open_in_memory()?)
    }

    fn ready(conn: Connection) -> AppResult<Self> {
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
