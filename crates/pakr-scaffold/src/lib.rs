pub mod config;
pub mod downloader;
pub mod error;
pub mod fsops;
pub mod http;
pub mod paths;
pub mod template;

pub use config::Settings;
pub use downloader::{temp_archive_path, ArchiveExtractor, ArchiveFetcher};
pub use error::{Result, ScaffoldError};
pub use fsops::{ensure_dir, ensure_not_exists, force_remove_file, remove_dir_recursive};
pub use paths::PackagePaths;
pub use template::{remove_scaffold_files, remove_temp_archive, rename_files, TokenTable};
