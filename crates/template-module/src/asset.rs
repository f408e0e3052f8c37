//! Convertible asset recognition.

/// Suffix appended to an asset path to name its generated module.
pub const MODULE_SUFFIX: &str = ".js";

/// File name suffixes that identify already generated modules.
pub const GENERATED_SUFFIXES: [&str; 2] = [".html.js", ".css.js"];

/// The two conventional component files that are converted into modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// `template.html`
    Markup,
    /// `component.css`
    Style,
}

impl AssetKind {
    /// All recognized asset kinds.
    pub const ALL: [AssetKind; 2] = [AssetKind::Markup, AssetKind::Style];

    /// Recognizes an asset by its exact file name.
    ///
    /// Only the bare name is compared, so `page-template.html` or
    /// `Template.html` are not convertible assets.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.file_name() == file_name)
    }

    /// Returns the conventional file name for this kind.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Markup => "template.html",
            AssetKind::Style => "component.css",
        }
    }
}

/// Returns whether a file name belongs to a generated module.
pub fn is_generated_module(file_name: &str) -> bool {
    GENERATED_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

/// Returns the generated module path for an asset path.
///
/// The suffix is appended; the existing extension is kept.
pub fn module_path(asset_path: &str) -> String {
    format!("{}{}", asset_path, MODULE_SUFFIX)
}
