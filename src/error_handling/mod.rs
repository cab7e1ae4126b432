//! Error types for the refresh run.
//!
//! The taxonomy mirrors the failure modes of the refresh procedure: admin API
//! failures (connectivity, authentication, service actions), configuration
//! loading failures, file operation failures, and patching failures.

mod types;

pub use types::{AdminError, ConfigError, FileOpError, InitializationError, PatchError};
