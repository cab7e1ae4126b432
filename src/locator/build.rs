//! Locator build invocation.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::config::constants::{FIELD_MAP, LOCATOR_STYLE, REFERENCE_ROLE, REFERENCE_TABLE};

/// Inputs for one locator build.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// The derived geodatabase the locator is built from.
    pub gdb: PathBuf,
    /// Output path of the locator, without extension; the build produces the
    /// file set next to it.
    pub output: PathBuf,
}

/// Builds one locator generation from a geodatabase.
///
/// The production implementation shells out to arcpy; tests substitute an
/// in-process fake.
pub trait LocatorBuilder: Send + Sync {
    /// Builds the locator described by `request`.
    ///
    /// On success the primary `.loc` file exists at `request.output` with
    /// the `.loc` extension appended, alongside its sibling files.
    fn build(&self, request: &BuildRequest) -> Result<()>;
}

/// Python snippet invoking the geocoding toolbox. Build inputs are passed as
/// argv so no shell quoting of the field map is needed.
const BUILD_SCRIPT: &str = "\
import sys
import arcpy
style, reference_data, field_map, output = sys.argv[1:5]
arcpy.CreateAddressLocator_geocoding(style, reference_data, field_map, output, '', 'ENABLED')
";

/// Builds the locator by running arcpy through a Python interpreter.
///
/// Uses the fixed locator style and reference-data field mapping from
/// [`crate::config::constants`]; only the geodatabase and output paths vary
/// per build.
#[derive(Debug, Clone)]
pub struct ArcpyLocatorBuilder {
    /// Python interpreter with arcpy available.
    pub python: PathBuf,
}

impl Default for ArcpyLocatorBuilder {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python"),
        }
    }
}

impl LocatorBuilder for ArcpyLocatorBuilder {
    fn build(&self, request: &BuildRequest) -> Result<()> {
        let reference_data = format!(
            "'{}/{}' '{}'",
            request.gdb.display(),
            REFERENCE_TABLE,
            REFERENCE_ROLE
        );
        debug!("Locator build reference data: {reference_data}");

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(BUILD_SCRIPT)
            .arg(LOCATOR_STYLE)
            .arg(&reference_data)
            .arg(FIELD_MAP)
            .arg(&request.output)
            .output()
            .with_context(|| format!("failed to run {}", self.python.display()))?;

        if !output.status.success() {
            bail!(
                "locator build exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}
