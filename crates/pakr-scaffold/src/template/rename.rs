//! Filename token substitution across an extracted template tree.

use std::fs;
use std::path::Path;

use aho_corasick::{AhoCorasick, MatchKind};
use walkdir::WalkDir;

use crate::{Result, ScaffoldError};

/// Generic vendor placeholder embedded in template filenames.
pub const GENERIC_VENDOR: &str = "MyVendor";

/// Generic package placeholder embedded in template filenames.
pub const GENERIC_PACKAGE: &str = "MyPackage";

/// Substitution table mapping the generic placeholder tokens to one
/// caller-supplied identifier pair, original case and lowercase.
///
/// All four substitutions are applied in a single combined pass, so a
/// replacement never feeds a later substitution.
pub struct TokenTable {
    searcher: AhoCorasick,
    replacements: [String; 4],
}

impl TokenTable {
    /// Build the table for one identifier pair. The pattern set is a
    /// fixed handful of short literals, so automaton construction
    /// cannot fail.
    pub fn new(vendor: &str, package: &str) -> Self {
        let patterns = [
            GENERIC_VENDOR.to_string(),
            GENERIC_PACKAGE.to_string(),
            GENERIC_VENDOR.to_lowercase(),
            GENERIC_PACKAGE.to_lowercase(),
        ];

        let searcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(patterns)
            .unwrap();

        Self {
            searcher,
            replacements: [
                vendor.to_string(),
                package.to_string(),
                vendor.to_lowercase(),
                package.to_lowercase(),
            ],
        }
    }

    /// Apply the substitutions to a basename, touching only the matched
    /// token spans.
    pub fn apply(&self, name: &str) -> String {
        self.searcher.replace_all(name, &self.replacements)
    }
}

/// Walk `package_dir` and rename every plain file whose basename
/// contains generic placeholder tokens.
///
/// Directories and symlinks are left untouched even when their names
/// carry the same tokens; the walk still descends into subdirectories.
pub fn rename_files(package_dir: &Path, vendor: &str, package: &str) -> Result<()> {
    let table = TokenTable::new(vendor, package);
    let mut pending = Vec::new();

    for entry in WalkDir::new(package_dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(package_dir).to_path_buf();
            ScaffoldError::io_at(&path, e.into())
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let replaced = table.apply(&name);
        if replaced == name {
            continue;
        }

        pending.push((entry.path().to_path_buf(), entry.path().with_file_name(replaced)));
    }

    for (source, dest) in pending {
        log::debug!("Renaming {} to {}", source.display(), dest.display());
        fs::rename(&source, &dest).map_err(|e| ScaffoldError::io_at(&source, e))?;
    }

    Ok(())
}
