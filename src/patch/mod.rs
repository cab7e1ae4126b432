//! Find-and-replace patching of generated locator files.
//!
//! The locator build tool bakes matching thresholds into the generated
//! `.loc` file as plain text; this module overrides them in place after each
//! rebuild. Patching is not atomic, which is acceptable only because the
//! file is regenerated wholesale on the next run.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::constants::TUNING_OVERRIDES;
use crate::error_handling::{FileOpError, PatchError};

/// Reads a file, substitutes every match of `pattern` with `replacement`,
/// and overwrites the file with the result.
///
/// `pattern` is a regular expression; callers replacing a literal string
/// must escape it first (see [`regex::escape`]). A file without any match is
/// rewritten with identical contents.
///
/// # Errors
///
/// Returns `PatchError::Pattern` for an invalid pattern and
/// `PatchError::File` if the file cannot be read or written.
pub fn replace_literal(path: &Path, pattern: &str, replacement: &str) -> Result<(), PatchError> {
    let contents = fs::read_to_string(path).map_err(|source| FileOpError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let re = Regex::new(pattern)?;
    let patched = re.replace_all(&contents, replacement);

    fs::write(path, patched.as_bytes()).map_err(|source| FileOpError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Applies the four threshold overrides to a freshly generated `.loc` file.
///
/// Each override replaces one baked-in default with a looser value; a `.loc`
/// file already carrying the overridden value is left unchanged.
pub fn apply_tuning_overrides(loc_path: &Path) -> Result<(), PatchError> {
    for (before, after) in TUNING_OVERRIDES {
        replace_literal(loc_path, &regex::escape(before), after)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).expect("Failed to write");
        file.flush().expect("Failed to flush");
        file
    }

    #[test]
    fn test_replace_literal_substitutes_match() {
        let file = write_temp("alpha = 1\nbeta = 2\n");
        replace_literal(file.path(), &regex::escape("beta = 2"), "beta = 9").unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "alpha = 1\nbeta = 9\n");
    }

    #[test]
    fn test_replace_literal_missing_pattern_leaves_file_identical() {
        let original = "alpha = 1\nbeta = 2\n";
        let file = write_temp(original);
        replace_literal(file.path(), &regex::escape("gamma = 3"), "gamma = 9").unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, original);
    }

    #[test]
    fn test_replace_literal_rejects_invalid_pattern() {
        let file = write_temp("alpha = 1\n");
        let err = replace_literal(file.path(), "[unclosed", "x").unwrap_err();
        assert!(matches!(err, PatchError::Pattern(_)));
    }

    #[test]
    fn test_tuning_overrides_replace_each_default_exactly_once() {
        let file = write_temp(
            "MinimumMatchScore = 85\n\
             MinimumCandidateScore = 75\n\
             SpellingSensitivity = 80\n\
             MaxSuggestCandidates = 10\n\
             EndOffset = 3\n",
        );
        apply_tuning_overrides(file.path()).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(
            contents,
            "MinimumMatchScore = 15\n\
             MinimumCandidateScore = 15\n\
             SpellingSensitivity = 15\n\
             MaxSuggestCandidates = 1\n\
             EndOffset = 3\n"
        );
    }

    #[test]
    fn test_tuning_overrides_noop_without_defaults() {
        let original = "MinimumMatchScore = 15\nEndOffset = 3\n";
        let file = write_temp(original);
        apply_tuning_overrides(file.path()).unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, original);
    }
}
