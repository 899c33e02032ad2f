mod new;
mod remove;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pakr")]
#[command(about = "Scaffold new packages from remote template archives")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new package from a template archive
    New(new::NewArgs),

    /// Remove a scaffolded package
    Remove(remove::RemoveArgs),
}

fn run() -> Result<i32> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::New(new_args) => {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| anyhow::anyhow!("Failed to create async runtime: {}", e))?;
            rt.block_on(new::execute(new_args))
        }
        Commands::Remove(remove_args) => remove::execute(remove_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
