//! Filesystem path validators.

use std::path::Path;

/// Returns true if `value` is an absolute path to a directory that exists
/// right now.
///
/// This is a live check, so the verdict can change between calls.
pub fn is_existing_directory(value: &str) -> bool {
    let path = Path::new(value.trim());
    path.is_absolute() && path.is_dir()
}
