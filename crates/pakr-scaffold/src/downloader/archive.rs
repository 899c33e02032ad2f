//! Zip archive extraction.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{Result, ScaffoldError};

/// Expands a local zip archive into a destination directory.
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    /// Extract `archive_path` into `dest_dir`, preserving the archive's
    /// internal relative paths and creating intermediate directories as
    /// needed. Entries that would land outside `dest_dir` are rejected.
    pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<()> {
        let file = File::open(archive_path).map_err(|e| ScaffoldError::Archive {
            path: archive_path.display().to_string(),
            reason: format!("cannot open archive: {}", e),
        })?;
        let reader = BufReader::new(file);
        let mut archive = zip::ZipArchive::new(reader).map_err(|e| ScaffoldError::Archive {
            path: archive_path.display().to_string(),
            reason: format!("failed to open zip: {}", e),
        })?;

        std::fs::create_dir_all(dest_dir).map_err(|e| ScaffoldError::io_at(dest_dir, e))?;
        let dest_dir_canonical = dest_dir
            .canonicalize()
            .map_err(|e| ScaffoldError::io_at(dest_dir, e))?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| ScaffoldError::Archive {
                path: archive_path.display().to_string(),
                reason: format!("failed to read zip entry: {}", e),
            })?;

            let name = entry.name().to_string();
            if name.is_empty() {
                continue;
            }

            if name.contains("..") {
                return Err(ScaffoldError::Archive {
                    path: archive_path.display().to_string(),
                    reason: format!("path traversal detected in entry: {}", name),
                });
            }

            let outpath = dest_dir.join(&name);

            // Create directories first so the containment check below can
            // canonicalize them.
            if entry.is_dir() {
                std::fs::create_dir_all(&outpath)
                    .map_err(|e| ScaffoldError::io_at(&outpath, e))?;
            } else if let Some(parent) = outpath.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io_at(parent, e))?;
            }

            let outpath_canonical = outpath.canonicalize().unwrap_or_else(|_| {
                // For new files, canonicalize the parent and append the filename
                if let Some(parent) = outpath.parent() {
                    if let Ok(parent_canonical) = parent.canonicalize() {
                        if let Some(filename) = outpath.file_name() {
                            return parent_canonical.join(filename);
                        }
                    }
                }
                outpath.clone()
            });

            if !outpath_canonical.starts_with(&dest_dir_canonical) {
                return Err(ScaffoldError::Archive {
                    path: archive_path.display().to_string(),
                    reason: format!("entry {} escapes destination directory", name),
                });
            }

            if entry.is_dir() {
                continue;
            }

            let mut outfile =
                File::create(&outpath).map_err(|e| ScaffoldError::io_at(&outpath, e))?;
            std::io::copy(&mut entry, &mut outfile)
                .map_err(|e| ScaffoldError::io_at(&outpath, e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))
                        .map_err(|e| ScaffoldError::io_at(&outpath, e))?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        for (name, contents) in entries {
            if name.ends_with('/') {
                writer.add_directory(name.trim_end_matches('/'), options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(contents).unwrap();
            }
        }

        writer.finish().unwrap();
    }

    #[test]
    fn test_extract_preserves_internal_paths() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("template.zip");
        let dest = temp.path().join("out");

        write_zip(
            &archive,
            &[
                ("MyPackage/MyVendorFile.php", b"<?php".as_slice()),
                ("MyPackage/src/deep/Nested.php", b"<?php".as_slice()),
                ("rules.php", b"<?php".as_slice()),
            ],
        );

        ArchiveExtractor::extract(&archive, &dest).unwrap();

        assert!(dest.join("MyPackage/MyVendorFile.php").is_file());
        assert!(dest.join("MyPackage/src/deep/Nested.php").is_file());
        assert!(dest.join("rules.php").is_file());
    }

    #[test]
    fn test_extract_writes_entry_contents() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("template.zip");
        let dest = temp.path().join("out");

        write_zip(&archive, &[("config.php", b"<?php return [];".as_slice())]);

        ArchiveExtractor::extract(&archive, &dest).unwrap();

        let contents = std::fs::read_to_string(dest.join("config.php")).unwrap();
        assert_eq!(contents, "<?php return [];");
    }

    #[test]
    fn test_extract_creates_explicit_directory_entries() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("template.zip");
        let dest = temp.path().join("out");

        write_zip(&archive, &[("MyPackage/", b"".as_slice())]);

        ArchiveExtractor::extract(&archive, &dest).unwrap();

        assert!(dest.join("MyPackage").is_dir());
    }

    #[test]
    fn test_extract_rejects_invalid_zip() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("broken.zip");
        let dest = temp.path().join("out");

        std::fs::write(&archive, b"this is not a zip file").unwrap();

        let err = ArchiveExtractor::extract(&archive, &dest).unwrap_err();
        assert!(matches!(err, ScaffoldError::Archive { .. }));
    }

    #[test]
    fn test_extract_rejects_path_traversal() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("evil.zip");
        let dest = temp.path().join("out");

        write_zip(&archive, &[("../evil.php", b"<?php".as_slice())]);

        let err = ArchiveExtractor::extract(&archive, &dest).unwrap_err();
        assert!(matches!(err, ScaffoldError::Archive { .. }));
        assert!(!temp.path().join("evil.php").exists());
    }

    #[test]
    fn test_extract_unopenable_archive_is_an_archive_error() {
        let temp = TempDir::new().unwrap();
        let archive = temp.path().join("missing.zip");
        let dest = temp.path().join("out");

        let err = ArchiveExtractor::extract(&archive, &dest).unwrap_err();
        assert!(matches!(err, ScaffoldError::Archive { .. }));
        assert!(err.to_string().contains("missing.zip"));
    }
}
