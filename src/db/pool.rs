//! SQLite connection wrapper (single connection, CLI lifetime).

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (and implicitly create) the database at `path`.
    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Close the connection and surface any error SQLite reports while doing so.
    /// On failure the handle is dropped anyway.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_conn, e)| e)?;
        Ok(())
    }
}
