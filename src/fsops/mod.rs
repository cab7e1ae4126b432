//! Filesystem helpers for replacing the derived geodatabase.

use std::fs;
use std::path::Path;

use crate::error_handling::FileOpError;

/// Removes a file or directory (recursively).
///
/// # Errors
///
/// Returns `FileOpError::Remove` if the path does not exist or cannot be
/// removed.
pub fn remove_path(path: &Path) -> Result<(), FileOpError> {
    let remove_err = |source: std::io::Error| FileOpError::Remove {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::symlink_metadata(path).map_err(remove_err)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(remove_err)
    } else {
        fs::remove_file(path).map_err(remove_err)
    }
}

/// Recursively copies a directory, creating the destination if needed and
/// overwriting files that already exist there.
///
/// # Errors
///
/// Returns `FileOpError::Copy` on any failure; the error names the entry
/// that could not be copied.
pub fn copy_dir_recursive(from: &Path, to: &Path) -> Result<(), FileOpError> {
    let copy_err = |source: std::io::Error| FileOpError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    fs::create_dir_all(to).map_err(copy_err)?;
    let entries = fs::read_dir(from).map_err(copy_err)?;
    for entry in entries {
        let entry = entry.map_err(copy_err)?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(copy_err)?;
        if file_type.is_dir() {
            copy_dir_recursive(&src, &dst)?;
        } else {
            fs::copy(&src, &dst).map_err(|source| FileOpError::Copy {
                from: src.clone(),
                to: dst.clone(),
                source,
            })?;
        }
    }
    Ok(())
}
