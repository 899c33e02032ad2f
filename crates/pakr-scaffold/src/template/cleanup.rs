//! Scaffold bookkeeping file cleanup.

use std::path::Path;

use crate::fsops::force_remove_file;

/// Template bookkeeping files that must not ship in a generated
/// package.
pub const SCAFFOLD_FILES: &[&str] = &["rules.php", "rewriteRules.php"];

/// Delete scaffold bookkeeping files from the package root. Absence of
/// a file in the set is not an error, and deletion failures are
/// swallowed.
pub fn remove_scaffold_files(package_dir: &Path) {
    for name in SCAFFOLD_FILES {
        let path = package_dir.join(name);
        if path.exists() {
            log::debug!("Removing scaffold file {}", path.display());
            force_remove_file(&path);
        }
    }
}

/// Delete the temporary download archive. Best-effort: the archive may
/// already be gone, and a leftover temp file must never fail the run.
pub fn remove_temp_archive(zip_file: &Path) {
    log::debug!("Removing temporary archive {}", zip_file.display());
    force_remove_file(zip_file);
}
