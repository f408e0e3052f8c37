//! Pointing template and style imports at their generated modules.

use crate::rule::ImportRule;
use regex::escape;
use std::borrow::Cow;
use std::sync::OnceLock;
use template_module::{module_path, AssetKind};

/// Returns the rule matching default imports of convertible assets.
///
/// Matches `import <binding> from '<...>template.html'` and the
/// `component.css` equivalent, in either quote style.
pub fn reference_rule() -> &'static ImportRule {
    static RULE: OnceLock<ImportRule> = OnceLock::new();
    RULE.get_or_init(|| {
        let assets = AssetKind::ALL
            .iter()
            .map(|kind| escape(kind.file_name()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r#"\bimport(?P<gap1>\s+)(?P<binding>\w+)(?P<gap2>\s+)from(?P<gap3>\s*)(?P<quote>['"])(?P<path>[^'"]*(?:{assets}))['"]"#
        );
        ImportRule::new(
            "asset-reference",
            &pattern,
            "import{gap1}{binding}{gap2}from{gap3}{quote}{path}{quote}",
        )
        .expect("asset reference rule is valid")
    })
}

/// Appends the module suffix to every import of a convertible asset.
pub fn rewrite_references(content: &str) -> Cow<'_, str> {
    reference_rule().rewrite(content, |path| Some(module_path(path)))
}
