use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

pub const DB_PATH_VAR: &str = "DB_PATH";
pub const SCHEMA_PATH_VAR: &str = "SCHEMA_PATH";

/// The two settings the bootstrap needs. Both are always non-empty and used
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub schema_path: PathBuf,
}

impl Config {
    /// Build the configuration from raw values (CLI flag or environment).
    /// `DB_PATH` is checked first, an empty value counts as missing.
    pub fn resolve(db_path: Option<&Path>, schema_path: Option<&Path>) -> AppResult<Self> {
        let db_path = required(db_path, DB_PATH_VAR)?;
        let schema_path = required(schema_path, SCHEMA_PATH_VAR)?;

        Ok(Self {
            db_path: db_path.to_path_buf(),
            schema_path: schema_path.to_path_buf(),
        })
    }
}

fn required<'a>(value: Option<&'a Path>, name: &'static str) -> AppResult<&'a Path> {
    match value {
        Some(v) if !v.as_os_str().is_empty() => Ok(v),
        _ => Err(AppError::MissingSetting(name)),
    }
}
