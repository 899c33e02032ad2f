//! Directory creation and removal primitives.

use std::fs;
use std::path::Path;

use crate::{Result, ScaffoldError};

/// Paths that `remove_dir_recursive` refuses to delete. Compared
/// literally, not canonicalized.
const PROTECTED_PATHS: &[&str] = &["packages", "/"];

/// Create `path` and any missing ancestors with fully open permissions.
///
/// Returns `true` if a directory was created, `false` if it already
/// existed.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder
        .create(path)
        .map_err(|e| ScaffoldError::io_at(path, e))?;
    Ok(true)
}

/// Fail if `path` is already a directory.
///
/// Called before any destructive or creative operation so an existing
/// package is never silently overwritten.
pub fn ensure_not_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(ScaffoldError::PackageExists {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

/// Delete `path` and everything beneath it, bottom-up.
///
/// Returns `Ok(false)` without touching disk when `path` is one of the
/// protected paths, so callers can tell "guarded" apart from "deleted".
/// Individual file deletions are best-effort; removal of the emptied
/// directories themselves reports failure.
pub fn remove_dir_recursive(path: &Path) -> Result<bool> {
    if PROTECTED_PATHS.iter().any(|p| Path::new(p) == path) {
        log::debug!("Refusing to remove protected path {}", path.display());
        return Ok(false);
    }

    let entries = fs::read_dir(path).map_err(|e| ScaffoldError::io_at(path, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::io_at(path, e))?;
        let entry_path = entry.path();

        if entry_path.is_dir() {
            remove_dir_recursive(&entry_path)?;
        } else {
            force_remove_file(&entry_path);
        }
    }

    fs::remove_dir(path).map_err(|e| ScaffoldError::io_at(path, e))?;
    Ok(true)
}

/// Best-effort file removal: force permissions open, then unlink.
/// Failures are ignored.
pub fn force_remove_file(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o777));
    }

    let _ = fs::remove_file(path);
}
