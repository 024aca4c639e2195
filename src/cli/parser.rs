use clap::Parser;
use std::path::PathBuf;

/// Command-line interface definition for dbinit
/// One-shot SQLite bootstrap: create the database from a schema script if it is missing
#[derive(Parser, Debug)]
#[command(
    name = "dbinit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create a SQLite database from a schema script, skipping it if the file already exists",
    long_about = None
)]
pub struct Cli {
    /// Database file to create (overrides $DB_PATH)
    #[arg(long = "db", value_name = "FILE", env = "DB_PATH")]
    pub db: Option<PathBuf>,

    /// Schema script applied to a new database (overrides $SCHEMA_PATH)
    #[arg(long = "schema", value_name = "FILE", env = "SCHEMA_PATH")]
    pub schema: Option<PathBuf>,
}
