//! Configuration types and CLI options.
//!
//! This module defines the runtime configuration struct and the serde types
//! for the per-environment YAML settings document.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::config::constants::{ADMIN_PORT, OPTIMIZER_ENVIRONMENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use locator_refresh::Config;
///
/// let config = Config {
///     environment: "production".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment name, lower-cased; selects `config.<environment>.yml`
    pub environment: String,

    /// Explicit settings file path, overriding the environment-derived name
    pub config_file: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Path of the settings document for the selected environment.
    pub fn config_path(&self) -> PathBuf {
        match &self.config_file {
            Some(path) => path.clone(),
            None => PathBuf::from(format!("config.{}.yml", self.environment)),
        }
    }

    /// Whether service stop/start calls are suppressed for this environment.
    pub fn dry_run(&self) -> bool {
        self.environment == OPTIMIZER_ENVIRONMENT
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "test".to_string(),
            config_file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Per-environment settings document.
///
/// Loaded once at startup from `config.<environment>.yml`; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentConfig {
    /// Shared update location holding the source geodatabase (read-only input)
    #[serde(rename = "input-address-gdb-location")]
    pub input_gdb_location: PathBuf,

    /// Target servers, refreshed one after another in document order
    pub target_servers: Vec<TargetServer>,
}

/// One target server record from the settings document.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetServer {
    /// Network address of the server
    pub ip: String,

    /// Administrative API username
    pub username: String,

    /// Administrative API password
    pub password: String,

    /// Directory receiving the geodatabase copy and the locator file set
    #[serde(rename = "output-address-locator-location")]
    pub output_locator_location: PathBuf,

    /// Administrative API port (defaults to 6080)
    #[serde(default = "default_admin_port")]
    pub port: u16,
}

fn default_admin_port() -> u16 {
    ADMIN_PORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_path_derived_from_environment() {
        let config = Config {
            environment: "production".to_string(),
            ..Default::default()
        };
        assert_eq!(config.config_path(), PathBuf::from("config.production.yml"));
    }

    #[test]
    fn test_config_path_explicit_override() {
        let config = Config {
            config_file: Some(PathBuf::from("/etc/locator/config.yml")),
            ..Default::default()
        };
        assert_eq!(config.config_path(), PathBuf::from("/etc/locator/config.yml"));
    }

    #[test]
    fn test_dry_run_only_for_optimizer() {
        let optimizer = Config {
            environment: "optimizer".to_string(),
            ..Default::default()
        };
        assert!(optimizer.dry_run());

        let test = Config::default();
        assert!(!test.dry_run());
    }
}
