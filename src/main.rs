//! Tessera - extension lifecycle and hook dispatch for components
//!
//! Main entry point for the Tessera CLI.

mod cli;
mod cmd_check;
mod register;

use anyhow::Context;
use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tessera_config::{ConfigLoader, LogFormat, LoggingConfig};

use crate::cli::{Cli, Commands, OutputFormat};

/// Initialize tracing on stderr, plus daily-rotated files when the
/// configuration names a directory.
///
/// `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level '{}'", logging.level))?;

    let console = match logging.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
    };

    let file = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("tessera")
                .filename_suffix("log")
                .max_log_files(30)
                .build(dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            // The guard flushes on drop; keep it for the process lifetime.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    let catalog = register::builtin_catalog()?;

    match cli.command {
        None => {
            let report = cmd_check::run_check(&config, &catalog)?;
            cmd_check::print_check(&report, OutputFormat::Table)
        }
        Some(Commands::Check { format }) => {
            let report = cmd_check::run_check(&config, &catalog)?;
            cmd_check::print_check(&report, format)
        }
        Some(Commands::List { format }) => cmd_check::print_list(&catalog, format),
    }
}
