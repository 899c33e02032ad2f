//! Remove command - delete a scaffolded package directory.

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::Confirm;

use pakr_scaffold::{remove_dir_recursive, PackagePaths, Settings};

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Vendor namespace of the package
    #[arg(value_name = "VENDOR")]
    pub vendor: String,

    /// Name of the package
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: RemoveArgs) -> Result<i32> {
    for identifier in [&args.vendor, &args.package] {
        if let Err(message) = crate::new::validate_identifier(identifier) {
            anyhow::bail!(message);
        }
    }

    let settings = Settings::from_env()?;
    let paths = PackagePaths::new(&settings.base_dir, &args.vendor, &args.package);
    let package_path = paths.package_path();

    if !package_path.is_dir() {
        eprintln!(
            "{} No package at {}",
            style("Error:").red().bold(),
            package_path.display()
        );
        return Ok(1);
    }

    if !args.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {}?", package_path.display()))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmed {
            println!("{} Nothing removed", style("Info:").cyan());
            return Ok(0);
        }
    }

    if !remove_package_tree(&paths)? {
        println!(
            "{} Path is protected, nothing removed",
            style("Info:").cyan()
        );
        return Ok(1);
    }

    println!(
        "{} Package {}/{} removed",
        style("Success:").green().bold(),
        paths.vendor(),
        paths.package()
    );
    Ok(0)
}

/// Delete the package directory and, when that leaves the vendor
/// directory empty, the vendor directory as well.
fn remove_package_tree(paths: &PackagePaths) -> Result<bool> {
    if !remove_dir_recursive(&paths.package_path())? {
        return Ok(false);
    }

    if paths.vendor_path().is_dir() {
        if let Ok(mut entries) = paths.vendor_path().read_dir() {
            if entries.next().is_none() {
                std::fs::remove_dir(paths.vendor_path()).ok();
            }
        }
    }

    Ok(true)
}
