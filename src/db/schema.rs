use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Run the whole schema script as one batch.
pub fn apply_schema(conn: &Connection, script: &str) -> AppResult<()> {
    conn.execute_batch(script)?;
    Ok(())
}

/// Commit pending changes. Statements outside an explicit transaction are
/// already durable, so this only matters for scripts that open one with BEGIN.
pub fn commit(conn: &Connection) -> AppResult<()> {
    if !conn.is_autocommit() {
        conn.execute_batch("COMMIT;")?;
    }
    Ok(())
}

/// User tables defined in the database, sorted by name.
pub fn table_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;

    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names)
}

/// Check if a table named `name` exists.
pub fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
