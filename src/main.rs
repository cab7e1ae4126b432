//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `locator_refresh` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use locator_refresh::initialization::init_logger_with;
use locator_refresh::{run_refresh, Config, LogFormat, LogLevel};

/// Rebuild Address Locator for use in geocode service.
#[derive(Debug, Parser)]
#[command(name = "locator_refresh", version)]
struct Cli {
    /// The environment to deploy to; selects config.<environment>.yml
    #[arg(long, default_value = "test")]
    environment: String,

    /// Explicit settings file, overriding the environment-derived name
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = Config {
        environment: cli.environment.to_lowercase(),
        config_file: cli.config_file,
        log_level: cli.log_level,
        log_format: cli.log_format,
    };

    match run_refresh(config).await {
        Ok(report) => {
            println!(
                "Refreshed {} server{} ({} succeeded, {} failed) in {:.1}s",
                report.servers,
                if report.servers == 1 { "" } else { "s" },
                report.succeeded,
                report.failed,
                report.elapsed_seconds
            );
            if report.failed > 0 {
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("locator_refresh error: {:#}", e);
            process::exit(1);
        }
    }
}
