//! dbinit main entrypoint.

use dbinit::run;
use dbinit::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if let Some(notice) = e.cleanup_notice() {
            warning(notice);
        }
        std::process::exit(1);
    }
}
