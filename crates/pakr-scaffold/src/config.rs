//! Environment-backed runtime settings.

use std::env;
use std::path::{Path, PathBuf};

use crate::Result;

/// Environment variable controlling TLS certificate verification.
const TLS_VERIFY_ENV: &str = "PAKR_TLS_VERIFY";

/// Settings shared by every scaffolding run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory under which `packages/` and temporary archives live.
    pub base_dir: PathBuf,

    /// Whether downloads verify TLS certificates.
    pub verify_tls: bool,
}

impl Settings {
    /// Build settings from the process environment, rooted at the
    /// current working directory.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_dir: env::current_dir()?,
            verify_tls: env_bool(TLS_VERIFY_ENV).unwrap_or(true),
        })
    }

    /// Build settings rooted at an explicit base directory.
    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            verify_tls: env_bool(TLS_VERIFY_ENV).unwrap_or(true),
        }
    }
}

/// Get a boolean value from an environment variable
fn env_bool(name: &str) -> Option<bool> {
    env::var(name).ok().map(|val| {
        !matches!(val.to_lowercase().as_str(), "false" | "0" | "")
    })
}
