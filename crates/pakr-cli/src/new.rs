//! New command - scaffold a package from a remote template archive.

use anyhow::Result;
use clap::Args;
use console::style;
use regex::Regex;
use std::path::Path;

use pakr_scaffold::{
    ensure_dir, ensure_not_exists, remove_dir_recursive, remove_scaffold_files,
    remove_temp_archive, rename_files, temp_archive_path, ArchiveExtractor, ArchiveFetcher,
    PackagePaths, ScaffoldError, Settings,
};

const DEFAULT_TEMPLATE_URL: &str =
    "https://github.com/thephpleague/skeleton/archive/master.zip";

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Vendor namespace for the new package
    #[arg(value_name = "VENDOR")]
    pub vendor: String,

    /// Name of the new package
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// URL of the template zip archive
    #[arg(long, default_value = DEFAULT_TEMPLATE_URL)]
    pub template: String,
}

/// Validate a vendor or package identifier: non-empty and free of path
/// separators, so it can only ever name a single path component.
pub(crate) fn validate_identifier(name: &str) -> Result<(), String> {
    let re = Regex::new(r"^[^/\\]+$").unwrap();
    if re.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "The identifier '{}' is invalid. It must be non-empty and must not contain path separators.",
            name
        ))
    }
}

pub async fn execute(args: NewArgs) -> Result<i32> {
    for identifier in [&args.vendor, &args.package] {
        if let Err(message) = validate_identifier(identifier) {
            anyhow::bail!(message);
        }
    }

    let settings = Settings::from_env()?;
    let paths = PackagePaths::new(&settings.base_dir, &args.vendor, &args.package);

    println!(
        "{} Creating package {}/{}",
        style("Info:").cyan(),
        style(paths.vendor()).white().bold(),
        style(paths.package()).white().bold()
    );

    ensure_not_exists(&paths.package_path())?;
    ensure_dir(&paths.packages_path())?;
    ensure_dir(&paths.vendor_path())?;
    ensure_dir(&paths.package_path())?;

    let archive = temp_archive_path(&settings.base_dir);

    let result = scaffold_into(&args, &settings, &paths, &archive).await;
    remove_temp_archive(&archive);

    match result {
        Ok(()) => {
            println!(
                "\n{} Package created in {}",
                style("Success:").green().bold(),
                style(paths.package_path().display()).cyan()
            );
            Ok(0)
        }
        Err(e) => {
            println!(
                "{} Rolling back {}",
                style("Warning:").yellow(),
                paths.package_path().display()
            );
            if let Err(rollback_err) = remove_dir_recursive(&paths.package_path()) {
                eprintln!(
                    "{} Rollback failed: {}",
                    style("Warning:").yellow(),
                    rollback_err
                );
            }
            Err(e.into())
        }
    }
}

/// The failure-sensitive stages: everything here runs against the
/// already-created package directory, so the caller rolls that
/// directory back when any stage fails.
async fn scaffold_into(
    args: &NewArgs,
    settings: &Settings,
    paths: &PackagePaths,
    archive: &Path,
) -> Result<(), ScaffoldError> {
    println!(
        "{} Downloading template from {}",
        style("Info:").cyan(),
        args.template
    );
    let fetcher = ArchiveFetcher::new(settings.verify_tls)?;
    fetcher.download(archive, &args.template).await?;

    println!("{} Extracting archive", style("Info:").cyan());
    ArchiveExtractor::extract(archive, &paths.package_path())?;

    println!("{} Renaming template files", style("Info:").cyan());
    rename_files(&paths.package_path(), &args.vendor, &args.package)?;
    remove_scaffold_files(&paths.package_path());

    Ok(())
}
