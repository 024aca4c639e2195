//! Path utilities: derive the directory that must exist before the database
//! file can be created.

use std::path::Path;

/// Parent directory of `path`, or None for a bare file name.
pub fn parent_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
