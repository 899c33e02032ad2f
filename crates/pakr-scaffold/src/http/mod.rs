//! HTTP transport for template archive downloads.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpError};
