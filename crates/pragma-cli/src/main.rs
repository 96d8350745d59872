//! Pragma CLI - translate declarative JSON element trees through a host builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::HostKind;

#[derive(Parser)]
#[command(name = "pragma")]
#[command(about = "Translate declarative element trees into host builder calls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to pragma.toml config file
    #[arg(short, long, default_value = "pragma.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default pragma.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Translate a single tree file
    Render {
        /// JSON tree file
        file: PathBuf,

        /// Host to translate against (defaults to config or "markup")
        #[arg(long, value_enum)]
        host: Option<HostKind>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translate every tree file in a directory
    Batch {
        /// Directory to scan
        dir: PathBuf,

        /// Host to translate against (defaults to config or "markup")
        #[arg(long, value_enum)]
        host: Option<HostKind>,

        /// Output directory (defaults to config or "out")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Render { file, host, output } => {
            let config = config::load_config(&cli.config)?;
            commands::render::run(&config, &file, host, output)?;
        }
        Commands::Batch { dir, host, output } => {
            let config = config::load_config(&cli.config)?;
            commands::batch::run(&config, &dir, host, output)?;
        }
    }

    Ok(())
}
