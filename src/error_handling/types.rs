//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::admin::ServiceAction;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for the ArcGIS Server administrative API.
#[derive(Error, Debug)]
pub enum AdminError {
    /// The administrative endpoint could not be reached.
    #[error("Could not connect to machine {address} on port {port}: {source}")]
    Connectivity {
        /// Network address of the target server.
        address: String,
        /// Administrative API port.
        port: u16,
        /// Underlying transport error.
        #[source]
        source: ReqwestError,
    },

    /// The token request succeeded at the transport level but no token was
    /// returned; carries the server's `messages` payload.
    #[error("Failed to get token: {messages}")]
    Authentication {
        /// Error payload reported by the server.
        messages: serde_json::Value,
    },

    /// A start/stop request reported a non-success status.
    #[error("Failed to {action} {service}: {payload}")]
    ServiceAction {
        /// The requested action.
        action: ServiceAction,
        /// The service identifier the action targeted.
        service: String,
        /// Full response payload reported by the server.
        payload: serde_json::Value,
    },

    /// The response body was not valid JSON.
    #[error("Malformed admin API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Error types for configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings document could not be read.
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read {
        /// Path of the settings document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings document is not valid YAML or is missing required keys.
    #[error("Failed to parse configuration file {}: {source}", path.display())]
    Parse {
        /// Path of the settings document.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Error types for filesystem operations.
#[derive(Error, Debug)]
pub enum FileOpError {
    /// A file or directory could not be removed.
    #[error("Failed to remove {}: {source}", path.display())]
    Remove {
        /// Path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be copied.
    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source path of the copy.
        from: PathBuf,
        /// Destination path of the copy.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Error types for find-and-replace patching.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The search pattern is not a valid regular expression.
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The target file could not be read or written.
    #[error(transparent)]
    File(#[from] FileOpError),
}
