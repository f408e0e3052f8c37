//! Development-mode normalization of relative imports under `pages`.

use super::{is_handwritten_source, read_file, write_file};
use crate::error::{BuildError, FileError};
use crate::walk::{FileOutcome, Stage};
use camino::Utf8Path;
use globset::{Glob, GlobSet, GlobSetBuilder};
use import_rewriter::{normalize_imports, SourceKind};

/// Directory segment that scopes import normalization.
pub const PAGES_SCOPE: &str = "**/pages/**";

/// Collapses one level of `../` ascent in page stylesheets and scripts.
#[derive(Debug, Clone)]
pub struct NormalizeStage {
    scope: GlobSet,
}

impl NormalizeStage {
    /// Creates the stage scoped to [`PAGES_SCOPE`].
    pub fn new() -> Result<Self, BuildError> {
        let glob = Glob::new(PAGES_SCOPE).map_err(|e| BuildError::InvalidGlob(e.to_string()))?;
        let scope = GlobSetBuilder::new()
            .add(glob)
            .build()
            .map_err(|e| BuildError::InvalidGlob(e.to_string()))?;
        Ok(Self { scope })
    }
}

impl Stage for NormalizeStage {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn applies_to(&self, relative: &Utf8Path) -> bool {
        is_handwritten_source(relative, &["css", "js"]) && self.scope.is_match(relative.as_str())
    }

    fn process(&self, path: &Utf8Path) -> Result<FileOutcome, FileError> {
        let Some(kind) = path.extension().and_then(SourceKind::from_extension) else {
            return Ok(FileOutcome::Unchanged);
        };

        let content = read_file(path)?;
        let normalized = normalize_imports(kind, &content);
        if normalized == content {
            return Ok(FileOutcome::Unchanged);
        }

        write_file(path, &normalized)?;
        tracing::info!("Fixed imports in: {}", path);
        Ok(FileOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scope() {
        let stage = NormalizeStage::new().unwrap();
        assert!(stage.applies_to(Utf8Path::new("pages/index.js")));
        assert!(stage.applies_to(Utf8Path::new("pages/login/index.js")));
        assert!(stage.applies_to(Utf8Path::new("app/pages/home/style.css")));
        assert!(!stage.applies_to(Utf8Path::new("js/auth.js")));
        assert!(!stage.applies_to(Utf8Path::new("mypages/index.js")));
        assert!(!stage.applies_to(Utf8Path::new("pages.js")));
    }

    #[test]
    fn test_skips_generated_and_other_files() {
        let stage = NormalizeStage::new().unwrap();
        assert!(!stage.applies_to(Utf8Path::new("pages/home/template.html.js")));
        assert!(!stage.applies_to(Utf8Path::new("pages/home/component.css.js")));
        assert!(!stage.applies_to(Utf8Path::new("pages/home/template.html")));
        assert!(!stage.applies_to(Utf8Path::new("pages/data.json")));
    }

    #[test]
    fn test_rewrites_page_script() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let script = root.join("index.js");
        fs::write(&script, "import x from '../../shared/component.css';\n").unwrap();

        let outcome = NormalizeStage::new().unwrap().process(&script).unwrap();

        assert_eq!(outcome, FileOutcome::Changed);
        assert_eq!(
            fs::read_to_string(&script).unwrap(),
            "import x from './../shared/component.css';\n"
        );
    }

    #[test]
    fn test_unchanged_file_reports_unchanged() {
        let dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let sheet = root.join("page.css");
        fs::write(&sheet, "@import './base.css';\n").unwrap();

        let outcome = NormalizeStage::new().unwrap().process(&sheet).unwrap();
        assert_eq!(outcome, FileOutcome::Unchanged);
    }
}
