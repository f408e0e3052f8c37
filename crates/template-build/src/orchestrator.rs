//! Main orchestration logic.

use crate::clone::clone_tree;
use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::output::BuildSummary;
use crate::stages::{ConvertStage, NormalizeStage, ReferenceStage};
use crate::walk::run_stage;
use camino::{Utf8Path, Utf8PathBuf};

/// Runs the full pipeline.
///
/// Pre-flight checks run before anything is touched: the invocation
/// directory must be the project root and the source directory must exist.
/// The build tree is then recreated and each stage runs over the whole tree
/// before the next one starts.
pub fn run(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    check_invocation_root(&config.root, &config.invocation_dir)?;

    let source = config.source_dir();
    let build = config.build_dir();
    if !source.is_dir() {
        return Err(BuildError::SourceMissing { path: source });
    }

    tracing::info!("Starting build process in {} mode...", config.mode);

    let copied = clone_tree(&source, &build)?;
    let mut summary = BuildSummary::new(config.mode, build.clone(), copied);

    summary.stages.push(run_stage(
        &build,
        &ConvertStage::new(config.mode, config.style_deletion),
    ));

    // Sees converted modules but not yet rewritten references.
    if config.mode.normalizes_imports() {
        summary.stages.push(run_stage(&build, &NormalizeStage::new()?));
    } else {
        tracing::debug!("Skipping import normalization in {} mode", config.mode);
    }

    // Needs every generated module to exist already.
    summary.stages.push(run_stage(&build, &ReferenceStage));

    tracing::info!("Build complete! Files are in {}/", build);
    Ok(summary)
}

/// Fails unless `invocation_dir` and `root` name the same directory.
pub fn check_invocation_root(
    root: &Utf8Path,
    invocation_dir: &Utf8Path,
) -> Result<(), BuildError> {
    let expected = canonicalize(root)?;
    let actual = canonicalize(invocation_dir)?;

    if expected != actual {
        return Err(BuildError::WrongInvocationRoot { expected, actual });
    }

    tracing::debug!("Running build from project root {}", expected);
    Ok(())
}

fn canonicalize(path: &Utf8Path) -> Result<Utf8PathBuf, BuildError> {
    path.canonicalize_utf8()
        .map_err(|source| BuildError::UnresolvedDirectory {
            path: path.to_owned(),
            source,
        })
}
