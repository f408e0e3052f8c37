//! Pointing asset imports at their generated modules.

use super::{is_handwritten_source, read_file, write_file};
use crate::error::FileError;
use crate::walk::{FileOutcome, Stage};
use camino::Utf8Path;
use import_rewriter::rewrite_references;

/// Appends `.js` to imports of `template.html` and `component.css`.
///
/// Must run after [`ConvertStage`](super::ConvertStage) so the rewritten
/// targets exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceStage;

impl Stage for ReferenceStage {
    fn name(&self) -> &'static str {
        "references"
    }

    fn applies_to(&self, relative: &Utf8Path) -> bool {
        is_handwritten_source(relative, &["js"])
    }

    fn process(&self, path: &Utf8Path) -> Result<FileOutcome, FileError> {
        let content = read_file(path)?;
        let rewritten = rewrite_references(&content);
        if rewritten == content {
            return Ok(FileOutcome::Unchanged);
        }

        write_file(path, &rewritten)?;
        tracing::info!("Processed: {}", path);
        Ok(FileOutcome::Changed)
    }
}
