//! Template archive download and extraction module.
//!
//! This module provides functionality for fetching a remote template
//! archive into a uniquely named temporary file and expanding it into
//! the package directory.

mod archive;
mod fetch;

pub use archive::ArchiveExtractor;
pub use fetch::{temp_archive_path, ArchiveFetcher};
