//! Candidate discovery: turn a user-supplied path into the ordered list of
//! diagram sources to convert.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::naming::{is_already_processed, is_candidate};
use crate::convert::ConvertError;

/// Collect the files to convert from `path`.
///
/// A file path yields itself when it is an eligible source. A directory
/// yields every eligible source directly inside it (and in sub-directories
/// when `recursive`), sorted by path. Symlinked directories are not
/// descended into. Generated `_byLib` files are never
/// returned. An empty result is an error: there is nothing to do.
pub fn collect_candidates(path: &Path, recursive: bool) -> Result<Vec<PathBuf>, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    if path.is_dir() {
        collect_dir(path, recursive, &mut files)?;
        files.sort();
    } else if is_candidate(path) {
        files.push(path.to_path_buf());
    } else if is_already_processed(path) {
        debug!(path = %path.display(), "skipping generated file");
    }

    if files.is_empty() {
        return Err(ConvertError::NoCandidates {
            path: path.to_path_buf(),
        });
    }
    Ok(files)
}

fn collect_dir(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    let entries = fs::read_dir(dir).map_err(|source| ConvertError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| ConvertError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| ConvertError::ListDirectory {
            path: path.clone(),
            source,
        })?;
        if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "skipping symlinked directory");
        } else if file_type.is_dir() {
            if recursive {
                collect_dir(&path, recursive, files)?;
            }
        } else if is_candidate(&path) {
            files.push(path);
        }
    }
    Ok(())
}
