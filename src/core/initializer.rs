use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::schema;
use crate::errors::{AppError, AppResult, Cleanup};
use crate::ui::messages::{info, success};
use crate::utils::path::parent_dir;
use std::fs;
use std::path::Path;

/// What a run did to the database path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A file was already there and was left untouched.
    AlreadyInitialized,
    /// The database was created and the schema applied.
    Created,
}

/// Create the database at `cfg.db_path` from `cfg.schema_path` unless a file
/// already exists there.
///
/// Existence is the only check: an existing file is never opened, whatever it
/// contains. If anything fails after the file has been opened, the partial file
/// is removed before the error is returned.
pub fn initialize(cfg: &Config) -> AppResult<Outcome> {
    let db_path = cfg.db_path.as_path();

    if db_path.exists() {
        info(format!(
            "Database file already exists at {}. Skipping initialization.",
            db_path.display()
        ));
        return Ok(Outcome::AlreadyInitialized);
    }

    info(format!(
        "Database file not found at {}. Initializing...",
        db_path.display()
    ));

    // 1️⃣ Directory
    if let Some(dir) = parent_dir(db_path) {
        fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        info(format!("Ensured directory {} exists.", dir.display()));
    }

    // 2️⃣ Schema text (no database file yet, nothing to clean up on failure)
    info(format!(
        "Reading schema from {}...",
        cfg.schema_path.display()
    ));
    let script = fs::read_to_string(&cfg.schema_path).map_err(|source| AppError::ReadSchema {
        path: cfg.schema_path.clone(),
        source,
    })?;

    // 3️⃣ Create + populate
    if let Err(e) = populate(db_path, &script) {
        return Err(AppError::Aborted {
            cause: Box::new(e),
            cleanup: rollback(db_path),
        });
    }

    Ok(Outcome::Created)
}

/// Open the database, run the script, commit and close.
/// Once opened, the connection is closed on every path before this returns.
fn populate(db_path: &Path, script: &str) -> AppResult<()> {
    info(format!(
        "Connecting to and creating database at {}...",
        db_path.display()
    ));
    let pool = DbPool::new(db_path)?;

    let applied = apply(&pool, script);
    let closed = pool.close();
    info("Database connection closed.");

    applied.and(closed)
}

fn apply(pool: &DbPool, script: &str) -> AppResult<()> {
    info("Executing schema script...");
    schema::apply_schema(&pool.conn, script)?;

    info("Committing changes...");
    schema::commit(&pool.conn)?;
    success("Database initialized successfully.");

    Ok(())
}

/// Best-effort removal of a partially created database file.
fn rollback(db_path: &Path) -> Cleanup {
    if !db_path.exists() {
        return Cleanup::NotNeeded;
    }

    match fs::remove_file(db_path) {
        Ok(()) => Cleanup::Removed(db_path.to_path_buf()),
        Err(e) => Cleanup::Failed(db_path.to_path_buf(), e),
    }
}
