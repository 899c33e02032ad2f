//! Template archive download.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use uuid::Uuid;

use crate::http::{HttpClient, HttpClientConfig, HttpError};
use crate::{Result, ScaffoldError};

/// Downloads a remote template archive to a local file.
pub struct ArchiveFetcher {
    client: HttpClient,
}

impl ArchiveFetcher {
    pub fn new(verify_tls: bool) -> Result<Self> {
        let config = HttpClientConfig::new().with_verify_tls(verify_tls);
        let client = HttpClient::with_config(config)?;

        Ok(Self { client })
    }

    /// Download `source_url` into `dest`. A single attempt; the caller
    /// decides whether to retry.
    pub async fn download(&self, dest: &Path, source_url: &str) -> Result<()> {
        log::debug!("Downloading {} to {}", source_url, dest.display());

        self.client
            .download(source_url, dest)
            .await
            .map_err(|e| match e {
                HttpError::Io(e) => ScaffoldError::io_at(dest, e),
                other => ScaffoldError::DownloadFailed {
                    url: source_url.to_string(),
                    reason: other.to_string(),
                },
            })
    }
}

/// Produce a unique path of the form `<base>/package<hash>.zip` for one
/// download. The hash is seeded from the current time and a random
/// token; uniqueness is probabilistic, good enough to keep concurrent
/// runs in the same directory from colliding.
pub fn temp_archive_path(base_dir: &Path) -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seed = format!("{}{}", now, Uuid::new_v4());

    let mut hasher = Md5::new();
    hasher.update(seed.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    base_dir.join(format!("package{}.zip", hash))
}
