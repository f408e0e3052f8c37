//! Converting `template.html` and `component.css` into script modules.

use super::{read_file, write_file};
use crate::config::{Mode, StyleDeletion};
use crate::error::FileError;
use crate::walk::{FileOutcome, Stage};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use template_module::{module_path, to_module, AssetKind};

/// Writes `<asset>.js` next to every convertible asset.
#[derive(Debug, Clone, Copy)]
pub struct ConvertStage {
    mode: Mode,
    style_deletion: StyleDeletion,
}

impl ConvertStage {
    /// Creates the stage for a build mode and style policy.
    pub fn new(mode: Mode, style_deletion: StyleDeletion) -> Self {
        Self {
            mode,
            style_deletion,
        }
    }
}

impl Stage for ConvertStage {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn applies_to(&self, relative: &Utf8Path) -> bool {
        relative
            .file_name()
            .and_then(AssetKind::from_file_name)
            .is_some()
    }

    fn process(&self, path: &Utf8Path) -> Result<FileOutcome, FileError> {
        let Some(kind) = path.file_name().and_then(AssetKind::from_file_name) else {
            return Ok(FileOutcome::Unchanged);
        };

        let content = read_file(path)?;
        let module = Utf8PathBuf::from(module_path(path.as_str()));
        write_file(&module, &to_module(&content))?;

        if self.style_deletion.removes(kind, self.mode) {
            fs::remove_file(path).map_err(|source| FileError::Remove {
                path: path.to_owned(),
                source,
            })?;
        }

        tracing::info!("Processed: {} → {}", path, module);
        Ok(FileOutcome::Changed)
    }
}
