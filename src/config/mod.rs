//! Configuration types and environment-settings loading.
//!
//! Runtime configuration (`Config`) comes from the command line; the
//! per-environment settings document (`EnvironmentConfig`) is a YAML file
//! named `config.<environment>.yml` describing the shared geodatabase
//! location and the target servers to refresh.

pub mod constants;
mod types;

pub use types::{Config, EnvironmentConfig, LogFormat, LogLevel, TargetServer};

use std::fs;
use std::path::Path;

use crate::error_handling::ConfigError;

/// Loads the per-environment settings document from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` if it is not valid YAML or is missing required keys.
pub fn load_environment_config(path: &Path) -> Result<EnvironmentConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
