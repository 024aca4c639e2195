//! dbinit library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use crate::core::initializer::{Outcome, initialize};
use errors::AppResult;

/// Entry point used by main.rs
pub fn run() -> AppResult<Outcome> {
    // 1️⃣ parse CLI (flags fall back to DB_PATH / SCHEMA_PATH)
    let cli = Cli::parse();

    // 2️⃣ validate settings before touching the filesystem
    let cfg = Config::resolve(cli.db.as_deref(), cli.schema.as_deref())?;

    // 3️⃣ bootstrap
    initialize(&cfg)
}
