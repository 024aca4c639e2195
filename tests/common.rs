#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary with DB_PATH / SCHEMA_PATH cleared from the inherited environment.
pub fn dbinit() -> Command {
    let mut cmd = cargo_bin_cmd!("dbinit");
    cmd.env_remove("DB_PATH").env_remove("SCHEMA_PATH");
    cmd
}

/// Create a unique scratch directory inside the system temp dir, removing any
/// leftovers from a previous run.
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dbinit", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a schema script into `dir` and return its path.
pub fn write_schema(dir: &Path, name: &str, sql: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, sql).expect("write schema");
    path
}

/// User tables of the database at `path`, sorted.
pub fn tables(path: &Path) -> Vec<String> {
    let conn = Connection::open(path).expect("open db");
    dbinit::db::schema::table_names(&conn).expect("list tables")
}
