//! CLI definitions for Tessera.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Tessera CLI.
#[derive(Parser)]
#[command(name = "tessera")]
#[command(about = "Extension lifecycle and hook dispatch for components")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.tessera/config.toml)
    #[arg(short, long, env = "TESSERA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load the configuration, build the enabled extensions and run a probe
    /// component through every hook (default)
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the built-in extensions
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}
