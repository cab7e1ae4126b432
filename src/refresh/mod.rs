//! Per-server refresh orchestration.
//!
//! Target servers are processed strictly one after another; within a server
//! the steps run in a fixed sequence: stop service, replace geodatabase,
//! purge the previous locator generation, build and publish a new one, tune
//! its thresholds, start service.
//!
//! Each step has an explicit failure policy. Stop/start failures and
//! stale-file deletion failures are logged and processing continues; the
//! geodatabase copy, the locator publish, and the tuning patch abort the
//! current server. A failed server never aborts the servers after it.

use std::time::Instant;

use anyhow::{Context, Result};
use log::{error, info, warn};
use reqwest::Client;
use tempfile::TempDir;

use crate::admin::{acquire_token, set_service_state, ServiceAction};
use crate::config::constants::{
    GDB_NAME, GEOCODE_SERVICE, LOCATOR_NAME, TOKEN_EXPIRATION_MINUTES,
};
use crate::config::{self, Config, EnvironmentConfig, TargetServer};
use crate::error_handling::{AdminError, FileOpError};
use crate::fsops;
use crate::initialization::init_client;
use crate::locator::{self, ArcpyLocatorBuilder, BuildRequest, LocatorBuilder};
use crate::patch;

/// Summary of one refresh run.
#[derive(Debug, Clone)]
pub struct RefreshReport {
    /// Number of target servers in the settings document.
    pub servers: usize,
    /// Servers refreshed end to end.
    pub succeeded: usize,
    /// Servers whose refresh aborted partway.
    pub failed: usize,
    /// Wall-clock duration of the run in seconds.
    pub elapsed_seconds: f64,
}

/// Runs a refresh using the settings document selected by `config` and the
/// arcpy locator builder.
///
/// # Errors
///
/// Returns an error if the settings document cannot be loaded or the HTTP
/// client cannot be constructed. Per-server failures are reported through
/// [`RefreshReport::failed`], not as errors.
pub async fn run_refresh(config: Config) -> Result<RefreshReport> {
    let path = config.config_path();
    let settings = config::load_environment_config(&path)?;
    info!("Config loaded: {}", path.display());
    run_refresh_with(&config, &settings, &ArcpyLocatorBuilder::default()).await
}

/// Runs a refresh with explicit settings and locator builder.
///
/// This is the seam used by integration tests, which substitute an
/// in-process builder for arcpy.
pub async fn run_refresh_with(
    config: &Config,
    settings: &EnvironmentConfig,
    builder: &dyn LocatorBuilder,
) -> Result<RefreshReport> {
    let started = Instant::now();
    let client = init_client().context("Failed to initialize HTTP client")?;

    info!("Environment: {}", config.environment);
    info!(
        "Input gdb directory: {}",
        settings.input_gdb_location.display()
    );

    let mut succeeded = 0;
    let mut failed = 0;
    for server in &settings.target_servers {
        info!("Processing target server: {}", server.ip);
        match process_server(config, settings, server, &client, builder).await {
            Ok(()) => succeeded += 1,
            Err(err) => {
                failed += 1;
                error!("Refresh failed for {}: {:#}", server.ip, err);
            }
        }
    }

    Ok(RefreshReport {
        servers: settings.target_servers.len(),
        succeeded,
        failed,
        elapsed_seconds: started.elapsed().as_secs_f64(),
    })
}

/// Runs the full step sequence for one target server.
async fn process_server(
    config: &Config,
    settings: &EnvironmentConfig,
    server: &TargetServer,
    client: &Client,
    builder: &dyn LocatorBuilder,
) -> Result<()> {
    let dry_run = config.dry_run();

    // Stop the geocode service first so nothing holds the gdb or locator
    // files open while they are replaced.
    let token = if dry_run {
        None
    } else {
        stop_service(client, server).await
    };

    replace_geodatabase(settings, server)?;
    purge_previous_locator(server);
    build_and_publish(server, builder)?;

    let primary = locator::primary_file(&server.output_locator_location, LOCATOR_NAME);
    patch::apply_tuning_overrides(&primary)
        .with_context(|| format!("Failed to tune thresholds in {}", primary.display()))?;
    info!("Tuned matching thresholds in {}", primary.display());

    if !dry_run {
        start_service(client, server, token.as_deref()).await;
    }
    Ok(())
}

/// Acquires a token and requests a stop of the geocode service.
///
/// Failures are logged, never propagated. The token is returned whenever
/// acquisition succeeded, even if the stop itself failed, so the start step
/// can still reuse it.
async fn stop_service(client: &Client, server: &TargetServer) -> Option<String> {
    let token = match acquire_token(
        client,
        &server.ip,
        server.port,
        &server.username,
        &server.password,
        TOKEN_EXPIRATION_MINUTES,
    )
    .await
    {
        Ok(token) => token,
        Err(err) => {
            warn!("{err}");
            return None;
        }
    };

    match set_service_state(
        client,
        &server.ip,
        server.port,
        GEOCODE_SERVICE,
        ServiceAction::Stop,
        &token,
    )
    .await
    {
        Ok(outcome) if outcome.success => {
            info!("Stop {GEOCODE_SERVICE} successful");
        }
        Ok(outcome) => {
            warn!(
                "{}",
                AdminError::ServiceAction {
                    action: ServiceAction::Stop,
                    service: GEOCODE_SERVICE.to_string(),
                    payload: outcome.payload,
                }
            );
        }
        Err(err) => warn!("{err}"),
    }
    Some(token)
}

/// Requests a start of the geocode service with the token from the stop
/// step. Failures are logged, never propagated.
async fn start_service(client: &Client, server: &TargetServer, token: Option<&str>) {
    let Some(token) = token else {
        warn!(
            "No admin token for {}; skipping start of {GEOCODE_SERVICE}",
            server.ip
        );
        return;
    };

    match set_service_state(
        client,
        &server.ip,
        server.port,
        GEOCODE_SERVICE,
        ServiceAction::Start,
        token,
    )
    .await
    {
        Ok(outcome) if outcome.success => {
            info!("Start {GEOCODE_SERVICE} successful");
        }
        Ok(outcome) => {
            warn!(
                "{}",
                AdminError::ServiceAction {
                    action: ServiceAction::Start,
                    service: GEOCODE_SERVICE.to_string(),
                    payload: outcome.payload,
                }
            );
        }
        Err(err) => warn!("{err}"),
    }
}

/// Replaces the server's derived geodatabase copy with a fresh one from the
/// shared update location.
///
/// A delete failure is logged and ignored (the copy may not exist yet); a
/// copy failure aborts the current server.
fn replace_geodatabase(
    settings: &EnvironmentConfig,
    server: &TargetServer,
) -> Result<(), FileOpError> {
    let gdb_in = settings.input_gdb_location.join(GDB_NAME);
    let gdb_out = server.output_locator_location.join(GDB_NAME);

    match fsops::remove_path(&gdb_out) {
        Ok(()) => info!("Deleted: {}", gdb_out.display()),
        Err(err) => warn!("Not deleted: {} ({err})", gdb_out.display()),
    }

    fsops::copy_dir_recursive(&gdb_in, &gdb_out)?;
    info!(
        "Copied gdb: {} -> {}",
        gdb_in.display(),
        gdb_out.display()
    );
    Ok(())
}

/// Deletes the previous locator generation. Failures are logged and ignored
/// (first run, or files already absent).
fn purge_previous_locator(server: &TargetServer) {
    for path in locator::locator_files(&server.output_locator_location, LOCATOR_NAME) {
        match fsops::remove_path(&path) {
            Ok(()) => info!("Previous locator file deleted: {}", path.display()),
            Err(err) => warn!("{err}"),
        }
    }
}

/// Builds a new locator generation in a scratch directory and publishes it
/// into the server's output directory.
///
/// The scratch directory is removed on every exit path, including build
/// failures. The generation is only published if the build produced the
/// primary `.loc` file.
fn build_and_publish(server: &TargetServer, builder: &dyn LocatorBuilder) -> Result<()> {
    let scratch = TempDir::new().context("Failed to create scratch directory")?;
    let staged = scratch.path().join(LOCATOR_NAME);
    info!("Temporary locator location: {}", staged.display());

    let request = BuildRequest {
        gdb: server.output_locator_location.join(GDB_NAME),
        output: staged,
    };
    builder
        .build(&request)
        .context("Locator build failed")?;

    if locator::primary_file(scratch.path(), LOCATOR_NAME).is_file() {
        locator::publish_locator(scratch.path(), LOCATOR_NAME, &server.output_locator_location)?;
        info!("New locator moved in place");
    } else {
        warn!("Locator build produced no primary file");
    }
    Ok(())
}
