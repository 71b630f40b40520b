//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// AyurSutra - Panchakarma clinic dashboard backend
#[derive(Parser, Debug)]
#[command(name = "ayursutra")]
#[command(version)]
#[command(about = "Panchakarma clinic dashboard backend", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Generate an example configuration file
    GenerateConfig {
        /// Output path (default: config.example.toml)
        path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Write the demo dataset as JSON
    ExportSeed {
        /// Output file path (default: stdout)
        path: Option<String>,
    },
}
