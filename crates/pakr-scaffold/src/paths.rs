//! Package location derivation.

use std::path::{Path, PathBuf};

/// Name of the directory under the base dir that holds all generated packages.
pub const PACKAGES_DIR: &str = "packages";

/// Resolved filesystem locations for one vendor/package pair.
///
/// All three paths are pure functions of the base directory and the
/// identifier pair; nothing here touches the filesystem.
#[derive(Debug, Clone)]
pub struct PackagePaths {
    base_dir: PathBuf,
    vendor: String,
    package: String,
}

impl PackagePaths {
    pub fn new<P: AsRef<Path>>(base_dir: P, vendor: &str, package: &str) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            vendor: vendor.to_string(),
            package: package.to_string(),
        }
    }

    /// Root directory under which all generated packages live.
    pub fn packages_path(&self) -> PathBuf {
        self.base_dir.join(PACKAGES_DIR)
    }

    /// Directory for the vendor namespace.
    pub fn vendor_path(&self) -> PathBuf {
        self.packages_path().join(&self.vendor)
    }

    /// Directory for the package itself.
    pub fn package_path(&self) -> PathBuf {
        self.vendor_path().join(&self.package)
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn package(&self) -> &str {
        &self.package
    }
}
