//! Unified application error type.
//! Every step of the bootstrap returns AppError so that `main` can report the
//! failure, plus the rollback outcome when there is one, and exit with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("{0} environment variable not set.")]
    MissingSetting(&'static str),

    // ---------------------------
    // Filesystem / schema input
    // ---------------------------
    #[error("Error creating directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File error: could not read schema {}: {source}", .path.display())]
    ReadSchema {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("SQLite error during initialization: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Failure after the database file was opened
    // ---------------------------
    #[error("{cause}")]
    Aborted {
        #[source]
        cause: Box<AppError>,
        cleanup: Cleanup,
    },
}

/// What happened to the partially created database file after a failure.
#[derive(Debug)]
pub enum Cleanup {
    /// No file was left at the path.
    NotNeeded,
    Removed(PathBuf),
    Failed(PathBuf, io::Error),
}

impl AppError {
    /// Line describing the rollback, printed after the error itself.
    pub fn cleanup_notice(&self) -> Option<String> {
        match self {
            AppError::Aborted {
                cleanup: Cleanup::Removed(path),
                ..
            } => Some(format!(
                "Removed partially created database file {}.",
                path.display()
            )),
            AppError::Aborted {
                cleanup: Cleanup::Failed(path, e),
                ..
            } => Some(format!(
                "Error removing partially created database file {}: {}",
                path.display(),
                e
            )),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
