//! HTTP transport for template archive downloads.
//!
//! A thin wrapper around `reqwest` that performs exactly one GET per
//! call and streams the body straight to a local file. Template
//! archives can be large, so nothing is buffered in memory, and no
//! overall deadline applies unless the caller sets one.
//!
//! # Examples
//!
//! ```no_run
//! use pakr_scaffold::http::HttpClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! client
//!     .download("https://example.com/template.zip", "/tmp/template.zip".as_ref())
//!     .await?;
//! # Ok(())
//! # }
//! ```

use futures_util::StreamExt;
use reqwest::{Client, Response};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

const DEFAULT_USER_AGENT: &str = "pakr/0.1";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Transfer settings for one client. `timeout` bounds the whole
/// transfer and is off by default so a slow archive download can run
/// to completion; `connect_timeout` only bounds connection setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub verify_tls: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            verify_tls: true,
        }
    }
}

impl HttpClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(HttpClientConfig::default())
    }

    pub fn with_config(config: HttpClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Perform one GET request. A non-success status is an error, and
    /// there is no retry.
    pub async fn get(&self, url: &str) -> Result<Response, HttpError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(HttpError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    /// GET `url` and stream the body into the file at `dest`, chunk by
    /// chunk.
    pub async fn download(&self, url: &str, dest: &Path) -> Result<(), HttpError> {
        let response = self.get(url).await?;

        let mut out = File::create(dest).await?;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            out.write_all(&chunk?).await?;
        }
        out.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_verifies_tls_without_deadline() {
        let config = HttpClientConfig::new();

        assert!(config.verify_tls);
        assert!(config.timeout.is_none());
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    fn test_config_builders() {
        let config = HttpClientConfig::new()
            .with_timeout(Duration::from_secs(90))
            .with_verify_tls(false);

        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert!(!config.verify_tls);
    }

    #[test]
    fn test_status_error_mentions_code_and_url() {
        let err = HttpError::Status {
            status: 403,
            url: "https://templates.test/skeleton.zip".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Server returned HTTP 403 for https://templates.test/skeleton.zip"
        );
    }

    #[tokio::test]
    async fn test_client_builds_with_tls_verification_disabled() {
        let config = HttpClientConfig::new().with_verify_tls(false);

        assert!(HttpClient::with_config(config).is_ok());
    }

    #[tokio::test]
    async fn test_download_streams_body_to_file() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{}/skeleton.zip", addr);

        std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let _ = request.respond(tiny_http::Response::from_data(b"archive body".to_vec()));
            }
        });

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("skeleton.zip");

        let client = HttpClient::new().unwrap();
        client.download(&url, &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"archive body");
    }

    #[tokio::test]
    async fn test_error_status_is_not_retried() {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let url = format!("http://{}/missing.zip", addr);

        let handle = std::thread::spawn(move || {
            let mut served = 0;
            while let Ok(request) = server.recv_timeout(Duration::from_secs(2)) {
                match request {
                    Some(request) => {
                        served += 1;
                        let response =
                            tiny_http::Response::from_string("not here").with_status_code(404);
                        let _ = request.respond(response);
                    }
                    None => break,
                }
            }
            served
        });

        let client = HttpClient::new().unwrap();
        let result = client.get(&url).await;

        match result {
            Err(HttpError::Status { status, url: err_url }) => {
                assert_eq!(status, 404);
                assert_eq!(err_url, url);
            }
            other => panic!("Expected Status error, got {:?}", other.map(|_| ())),
        }

        // A single attempt means the server saw exactly one request.
        assert_eq!(handle.join().unwrap(), 1);
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_download_from_real_host() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("master.zip");

        let client = HttpClient::new().unwrap();
        client
            .download(
                "https://github.com/thephpleague/skeleton/archive/master.zip",
                &dest,
            )
            .await
            .unwrap();

        assert!(std::fs::metadata(&dest).unwrap().len() > 0);
    }
}
