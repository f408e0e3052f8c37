//! Configuration loading.

use crate::error::BuildError;
use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use template_module::AssetKind;

/// Source directory, relative to the project root.
pub const SOURCE_DIR: &str = "src";

/// Build directory, relative to the project root.
pub const BUILD_DIR: &str = "tmp";

/// File marking the project root for the default root lookup.
pub const ROOT_MARKER: &str = "package.json";

/// Build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Development build; page imports are normalized
    #[value(alias = "dev")]
    #[serde(alias = "dev")]
    Development,
    /// Production build (default)
    #[default]
    #[value(alias = "prod")]
    #[serde(alias = "prod")]
    Production,
}

impl Mode {
    /// Returns whether relative imports under `pages` are normalized.
    pub fn normalizes_imports(self) -> bool {
        self == Mode::Development
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

/// What happens to `component.css` after it has been converted.
///
/// `template.html` is always removed once its module is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleDeletion {
    /// Keep the stylesheet next to its module (default)
    #[default]
    Keep,
    /// Always remove the stylesheet
    Remove,
    /// Remove in production, keep in development
    ByMode,
}

impl StyleDeletion {
    /// Returns whether a converted asset of `kind` is removed in `mode`.
    pub fn removes(self, kind: AssetKind, mode: Mode) -> bool {
        match kind {
            AssetKind::Markup => true,
            AssetKind::Style => match self {
                StyleDeletion::Keep => false,
                StyleDeletion::Remove => true,
                StyleDeletion::ByMode => mode == Mode::Production,
            },
        }
    }
}

/// Optional project configuration read from `template-build.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    /// Default build mode.
    #[serde(default)]
    pub mode: Option<Mode>,

    /// Default style deletion policy.
    #[serde(default)]
    pub style_deletion: Option<StyleDeletion>,
}

impl ProjectConfig {
    /// Config file name, looked up in the project root.
    pub const FILE_NAME: &'static str = "template-build.json";

    /// Loads configuration from a file.
    pub fn load(path: &Utf8Path) -> Result<Self, BuildError> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| BuildError::ConfigInvalid {
            path: path.to_owned(),
            source,
        })
    }

    /// Finds and loads the config file from a project root.
    pub fn find(project_root: &Utf8Path) -> Result<Option<(Utf8PathBuf, Self)>, BuildError> {
        let path = project_root.join(Self::FILE_NAME);
        if path.is_file() {
            Self::load(&path).map(|config| Some((path, config)))
        } else {
            Ok(None)
        }
    }
}

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory the build must be invoked from.
    pub root: Utf8PathBuf,

    /// Directory the build was invoked from.
    pub invocation_dir: Utf8PathBuf,

    /// Build mode.
    pub mode: Mode,

    /// Style deletion policy.
    pub style_deletion: StyleDeletion,
}

impl BuildConfig {
    /// Creates a config with default mode and policy.
    pub fn new(root: impl Into<Utf8PathBuf>, invocation_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            invocation_dir: invocation_dir.into(),
            mode: Mode::default(),
            style_deletion: StyleDeletion::default(),
        }
    }

    /// Sets the build mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the style deletion policy.
    pub fn with_style_deletion(mut self, style_deletion: StyleDeletion) -> Self {
        self.style_deletion = style_deletion;
        self
    }

    /// Resolves settings from CLI overrides, the project config file and defaults.
    pub fn resolve(
        root: Option<&Utf8Path>,
        invocation_dir: &Utf8Path,
        mode: Option<Mode>,
        style_deletion: Option<StyleDeletion>,
    ) -> Result<Self, BuildError> {
        let root = match root {
            Some(root) if root.is_relative() => invocation_dir.join(root),
            Some(root) => root.to_owned(),
            None => find_project_root(invocation_dir),
        };

        let project = match ProjectConfig::find(&root)? {
            Some((path, config)) => {
                tracing::debug!("Loaded config from {}", path);
                config
            }
            None => ProjectConfig::default(),
        };

        Ok(Self::new(root, invocation_dir)
            .with_mode(mode.or(project.mode).unwrap_or_default())
            .with_style_deletion(
                style_deletion
                    .or(project.style_deletion)
                    .unwrap_or_default(),
            ))
    }

    /// Returns the source directory.
    pub fn source_dir(&self) -> Utf8PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// Returns the build directory.
    pub fn build_dir(&self) -> Utf8PathBuf {
        self.root.join(BUILD_DIR)
    }
}

/// Returns the nearest ancestor of `start` holding a `package.json`.
///
/// Falls back to `start` itself when no ancestor has one.
pub fn find_project_root(start: &Utf8Path) -> Utf8PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(ROOT_MARKER).is_file())
        .unwrap_or(start)
        .to_owned()
}
