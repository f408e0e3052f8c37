//! Build tree traversal.
//!
//! Every stage is a [`Stage`]: a predicate over tree-relative paths plus a
//! per-file transform. [`run_stage`] lists the whole tree up front, then
//! applies the stage to each matching file in path order. Files a stage
//! creates or removes therefore never affect its own walk.

use crate::error::FileError;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use walkdir::WalkDir;

/// What a stage did to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The tree was modified.
    Changed,
    /// The file was inspected and left as is.
    Unchanged,
}

/// One step of the build pipeline.
pub trait Stage {
    /// Short stage name for logs and summaries.
    fn name(&self) -> &'static str;

    /// Returns whether the stage handles the file at `relative`
    /// (relative to the build tree root).
    fn applies_to(&self, relative: &Utf8Path) -> bool;

    /// Transforms one file, given its full path.
    fn process(&self, path: &Utf8Path) -> Result<FileOutcome, FileError>;
}

/// A per-file failure recorded during a stage.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// The stage that failed.
    pub stage: &'static str,
    /// The failing file.
    pub path: Utf8PathBuf,
    /// The error message.
    pub message: String,
}

/// The result of running one stage over the tree.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    /// The stage name.
    pub stage: &'static str,
    /// Number of files the stage applied to.
    pub matched: usize,
    /// Number of files the stage changed.
    pub changed: usize,
    /// Files that failed.
    pub failures: Vec<FileFailure>,
}

/// Lists every file under `tree`, sorted by path.
///
/// Unreadable entries and non UTF-8 paths are logged and skipped.
pub fn collect_files(tree: &Utf8Path) -> Vec<Utf8PathBuf> {
    WalkDir::new(tree)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| match Utf8PathBuf::try_from(e.into_path()) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping non UTF-8 path: {}", e.as_path().display());
                None
            }
        })
        .collect()
}

/// Applies `stage` to every matching file under `tree`.
///
/// A failing file is logged and recorded; the walk continues with the next
/// file and nothing already written is rolled back.
pub fn run_stage(tree: &Utf8Path, stage: &dyn Stage) -> StageReport {
    let _span = tracing::info_span!("stage", stage = stage.name()).entered();

    let mut report = StageReport {
        stage: stage.name(),
        matched: 0,
        changed: 0,
        failures: Vec::new(),
    };

    for path in collect_files(tree) {
        let relative = path.strip_prefix(tree).unwrap_or(&path);
        if !stage.applies_to(relative) {
            continue;
        }

        report.matched += 1;
        match stage.process(&path) {
            Ok(FileOutcome::Changed) => report.changed += 1,
            Ok(FileOutcome::Unchanged) => {}
            Err(e) => {
                tracing::error!("Error processing {}: {}", e.path(), e);
                report.failures.push(FileFailure {
                    stage: stage.name(),
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        matched = report.matched,
        changed = report.changed,
        failed = report.failures.len(),
        "Stage finished"
    );
    report
}
