//! Locator generation and publishing.
//!
//! A locator generation is a set of sibling files sharing a base name: the
//! primary `.loc` text file, its `.loc.xml` metadata, and the `.lox` binary
//! companion. Each run builds a new generation in a scratch directory and
//! publishes it by copy, overwriting the previous generation.

mod build;

pub use build::{ArcpyLocatorBuilder, BuildRequest, LocatorBuilder};

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error_handling::FileOpError;

/// File extensions making up one locator generation, primary file first.
pub const LOCATOR_EXTENSIONS: [&str; 3] = ["loc", "loc.xml", "lox"];

/// Paths of the locator file set with base name `name` inside `dir`, in
/// [`LOCATOR_EXTENSIONS`] order.
pub fn locator_files(dir: &Path, name: &str) -> [PathBuf; 3] {
    LOCATOR_EXTENSIONS.map(|ext| dir.join(format!("{name}.{ext}")))
}

/// Path of the primary `.loc` file with base name `name` inside `dir`.
pub fn primary_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.loc"))
}

/// Copies a staged locator generation into the target directory, overwriting
/// any previous generation there.
///
/// Sibling files absent from the staged generation are skipped; the caller
/// is expected to have checked that the primary file exists.
///
/// # Errors
///
/// Returns `FileOpError::Copy` if any staged file cannot be copied.
pub fn publish_locator(staged_dir: &Path, name: &str, target_dir: &Path) -> Result<(), FileOpError> {
    let staged = locator_files(staged_dir, name);
    let published = locator_files(target_dir, name);
    for (src, dst) in staged.iter().zip(published.iter()) {
        if !src.is_file() {
            debug!("Skipping absent locator file: {}", src.display());
            continue;
        }
        fs::copy(src, dst).map_err(|source| FileOpError::Copy {
            from: src.clone(),
            to: dst.clone(),
            source,
        })?;
    }
    Ok(())
}
