//! CLI mode
//!
//! One-shot maintenance commands that run without starting the server.

use std::path::Path;

use colored::Colorize;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::errors::{ClinicError, Result};
use crate::storage::seed;

pub const DEFAULT_SAMPLE_CONFIG_PATH: &str = "config.example.toml";

/// Run a CLI command; `Serve` is handled by the caller
pub async fn run_cli(command: Commands) -> Result<()> {
    match command {
        Commands::Serve => Ok(()),
        Commands::GenerateConfig { path, force } => {
            let path = path.unwrap_or_else(|| DEFAULT_SAMPLE_CONFIG_PATH.to_string());
            generate_config(&path, force)?;
            println!("{} {}", "Sample configuration written to".green(), path.bold());
            Ok(())
        }
        Commands::ExportSeed { path } => {
            let json = export_seed_json()?;
            match path {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("{} {}", "Demo dataset written to".green(), path.bold());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

pub fn generate_config(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        return Err(ClinicError::file_operation(format!(
            "{} already exists, use --force to overwrite",
            path
        )));
    }
    StaticConfig::default().save_to_file(path)
}

pub fn export_seed_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&seed::demo_data())?)
}
