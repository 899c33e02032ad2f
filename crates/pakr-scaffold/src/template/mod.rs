//! Template post-processing: filename token substitution and scaffold
//! file cleanup.

mod cleanup;
mod rename;

pub use cleanup::{remove_scaffold_files, remove_temp_archive, SCAFFOLD_FILES};
pub use rename::{rename_files, TokenTable, GENERIC_PACKAGE, GENERIC_VENDOR};
