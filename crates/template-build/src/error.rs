//! Build error types.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal error that stops the build before or during tree setup.
#[derive(Debug, Error, Diagnostic)]
pub enum BuildError {
    /// The build was started outside the project root.
    #[error("this build must be run from the root level of the project (expected {expected}, current path {actual})")]
    #[diagnostic(
        code(template_build::wrong_root),
        help("change into the project root, or pass --root with the current directory")
    )]
    WrongInvocationRoot {
        /// The expected project root.
        expected: Utf8PathBuf,
        /// The directory the build was started from.
        actual: Utf8PathBuf,
    },

    /// A root or invocation directory could not be resolved.
    #[error("failed to resolve directory {path}: {source}")]
    #[diagnostic(code(template_build::unresolved_dir))]
    UnresolvedDirectory {
        /// The directory that failed to resolve.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source directory does not exist.
    #[error("source directory not found at {path}")]
    #[diagnostic(code(template_build::source_missing))]
    SourceMissing {
        /// The missing source directory.
        path: Utf8PathBuf,
    },

    /// Copying the source tree into the build tree failed.
    #[error("failed to clone {}: {source}", .path.display())]
    #[diagnostic(code(template_build::clone_failed))]
    CloneFailed {
        /// The path being removed, created or copied.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The project config file could not be read.
    #[error("failed to read config {path}: {source}")]
    #[diagnostic(code(template_build::config_read))]
    ConfigRead {
        /// The config file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The project config file is not valid.
    #[error("invalid config {path}: {source}")]
    #[diagnostic(code(template_build::config_invalid))]
    ConfigInvalid {
        /// The config file path.
        path: Utf8PathBuf,
        /// The JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Invalid glob pattern.
    #[error("invalid glob pattern: {0}")]
    #[diagnostic(code(template_build::invalid_glob))]
    InvalidGlob(String),
}

/// A recoverable error confined to a single file.
#[derive(Debug, Error)]
pub enum FileError {
    /// Failed to read the file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to remove the file.
    #[error("failed to remove {path}: {source}")]
    Remove {
        /// The file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Returns the path of the file that failed.
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            FileError::Read { path, .. }
            | FileError::Write { path, .. }
            | FileError::Remove { path, .. } => path,
        }
    }
}
