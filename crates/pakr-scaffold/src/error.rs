use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    // Precondition errors
    #[error("Package already exists: {path}")]
    PackageExists { path: String },

    // Network errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Download failed for {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    // Archive errors
    #[error("Archive error in {path}: {reason}")]
    Archive { path: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error at {path}: {reason}")]
    IoAt { path: String, reason: String },
}

impl ScaffoldError {
    /// An IO failure pinned to the path it happened on.
    pub(crate) fn io_at(path: &Path, source: std::io::Error) -> Self {
        Self::IoAt {
            path: path.display().to_string(),
            reason: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
