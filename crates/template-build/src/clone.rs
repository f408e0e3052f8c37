//! Build tree cloning.

use crate::error::BuildError;
use camino::Utf8Path;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Replaces `dest` with a full copy of `source`.
///
/// Any existing `dest` is removed first; nothing is merged. Symlinks in the
/// source are followed and their targets copied. Returns the number of files
/// copied.
pub fn clone_tree(source: &Utf8Path, dest: &Utf8Path) -> Result<usize, BuildError> {
    if !source.is_dir() {
        return Err(BuildError::SourceMissing {
            path: source.to_owned(),
        });
    }

    if dest.exists() {
        fs::remove_dir_all(dest).map_err(|e| clone_error(dest.as_std_path(), e))?;
    }

    let mut copied = 0;
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source.as_std_path()).to_path_buf();
            clone_error(&path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| clone_error(entry.path(), io::Error::new(io::ErrorKind::Other, e)))?;
        let target = dest.as_std_path().join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| clone_error(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| clone_error(entry.path(), e))?;
            copied += 1;
        }
    }

    tracing::info!("Copied source tree: {} → {}", source, dest);
    Ok(copied)
}

fn clone_error(path: &Path, source: io::Error) -> BuildError {
    BuildError::CloneFailed {
        path: path.to_path_buf(),
        source,
    }
}
