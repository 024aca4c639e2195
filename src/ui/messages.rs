//! Terminal output: progress on stdout, diagnostics on stderr.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

enum Stream {
    Out,
    Err,
}

fn emit<T: fmt::Display>(stream: Stream, color: &str, icon: &str, msg: T) {
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");
    match stream {
        Stream::Out => println!("{line}"),
        Stream::Err => eprintln!("{line}"),
    }
}

/// Progress narration.
pub fn info<T: fmt::Display>(msg: T) {
    emit(Stream::Out, FG_BLUE, ICON_INFO, msg);
}

/// A completed step.
pub fn success<T: fmt::Display>(msg: T) {
    emit(Stream::Out, FG_GREEN, ICON_OK, msg);
}

/// Cleanup outcome after a failure.
pub fn warning<T: fmt::Display>(msg: T) {
    emit(Stream::Err, FG_YELLOW, ICON_WARN, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Stream::Err, FG_RED, ICON_ERR, msg);
}
