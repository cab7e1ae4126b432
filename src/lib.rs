//! locator_refresh library: geocode address-locator refresh orchestration
//!
//! This library rebuilds the address locator behind a geocode service across a
//! configured list of target servers. For each server it stops the geocode
//! service through the ArcGIS Server administrative API, replaces the derived
//! geodatabase copy with a fresh one from the shared update location, rebuilds
//! the locator in a scratch directory, publishes it, patches the matching
//! thresholds in the generated `.loc` file, and restarts the service.
//!
//! # Example
//!
//! ```no_run
//! use locator_refresh::{run_refresh, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     environment: "test".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_refresh(config).await?;
//! println!("Refreshed {} servers: {} succeeded, {} failed",
//!          report.servers, report.succeeded, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod admin;
pub mod config;
pub mod error_handling;
mod fsops;
pub mod initialization;
pub mod locator;
pub mod patch;
pub mod refresh;

// Re-export public API
pub use config::{Config, EnvironmentConfig, LogFormat, LogLevel, TargetServer};
pub use refresh::{run_refresh, run_refresh_with, RefreshReport};
