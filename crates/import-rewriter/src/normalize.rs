//! Development-mode relative import normalization.

use crate::ascent::collapse_ascent;
use crate::rule::ImportRule;
use std::borrow::Cow;
use std::sync::OnceLock;

/// The kind of source file an import lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// A `.css` file; imports are `@import` statements.
    Stylesheet,
    /// A `.js` file; imports are `from` clauses.
    Script,
}

impl SourceKind {
    /// Recognizes a source file by extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "css" => Some(SourceKind::Stylesheet),
            "js" => Some(SourceKind::Script),
            _ => None,
        }
    }

    /// Returns the import rule used to normalize this kind of file.
    pub fn normalize_rule(self) -> &'static ImportRule {
        match self {
            SourceKind::Stylesheet => stylesheet_rule(),
            SourceKind::Script => script_rule(),
        }
    }
}

fn stylesheet_rule() -> &'static ImportRule {
    static RULE: OnceLock<ImportRule> = OnceLock::new();
    RULE.get_or_init(|| {
        ImportRule::new(
            "css-import",
            r#"@import(?P<gap>\s+)(?P<quote>['"])(?P<path>[^'"]+\.css)['"]"#,
            "@import{gap}{quote}{path}{quote}",
        )
        .expect("css import rule is valid")
    })
}

fn script_rule() -> &'static ImportRule {
    static RULE: OnceLock<ImportRule> = OnceLock::new();
    RULE.get_or_init(|| {
        ImportRule::new(
            "js-from",
            r#"\bfrom(?P<gap>\s+)(?P<quote>['"])(?P<path>[^'"]+\.(?:js|css))['"]"#,
            "from{gap}{quote}{path}{quote}",
        )
        .expect("js from rule is valid")
    })
}

/// Collapses one level of `../` ascent in every matching import.
///
/// Imports without a leading ascent, and any text that is not a matching
/// import, are returned byte-identical.
pub fn normalize_imports(kind: SourceKind, content: &str) -> Cow<'_, str> {
    kind.normalize_rule().rewrite(content, collapse_ascent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_extension() {
        assert_eq!(SourceKind::from_extension("css"), Some(SourceKind::Stylesheet));
        assert_eq!(SourceKind::from_extension("js"), Some(SourceKind::Script));
        assert_eq!(SourceKind::from_extension("html"), None);
    }

    #[test]
    fn test_css_single_ascent() {
        assert_eq!(
            normalize_imports(SourceKind::Stylesheet, "@import \"../base.css\";"),
            "@import \"./base.css\";"
        );
    }

    #[test]
    fn test_css_keeps_relative_imports() {
        let css = "@import './local.css';\n.a { color: red; }\n";
        let output = normalize_imports(SourceKind::Stylesheet, css);
        assert_eq!(output, css);
    }

    #[test]
    fn test_css_ignores_non_css_targets() {
        let css = "@import url(\"../fonts.css\");\n@import '../theme.scss';\n";
        assert_eq!(normalize_imports(SourceKind::Stylesheet, css), css);
    }

    #[test]
    fn test_js_from_clauses() {
        let js = "import { api } from '../../js/api.js';\nimport styles from \"../component.css\";\n";
        assert_eq!(
            normalize_imports(SourceKind::Script, js),
            "import { api } from './../js/api.js';\nimport styles from \"./component.css\";\n"
        );
    }

    #[test]
    fn test_js_ignores_other_extensions() {
        let js = "import template from '../template.html';\nimport data from '../data.json';\n";
        assert_eq!(normalize_imports(SourceKind::Script, js), js);
    }

    #[test]
    fn test_js_preserves_whitespace() {
        assert_eq!(
            normalize_imports(SourceKind::Script, "export * from\t'../x.js';"),
            "export * from\t'./x.js';"
        );
    }

    #[test]
    fn test_js_requires_word_boundary() {
        let js = "const datafrom '../x.js';";
        assert_eq!(normalize_imports(SourceKind::Script, js), js);
    }

    #[test]
    fn test_stylesheet_rule_does_not_touch_scripts() {
        let js = "import a from '../a.js';";
        assert_eq!(normalize_imports(SourceKind::Stylesheet, js), js);
    }

    #[test]
    fn test_snapshot_page_script() {
        let js = r#"import { renderTasks } from '../render.js';
import { filterTasks } from '../../js/task/filter.js';
import template from './template.html';
import './local.css';
import styles from "../../components/card/component.css";

export function init() {
  return renderTasks(filterTasks([]));
}"#;
        insta::assert_snapshot!(normalize_imports(SourceKind::Script, js), @r#"
        import { renderTasks } from './render.js';
        import { filterTasks } from './../js/task/filter.js';
        import template from './template.html';
        import './local.css';
        import styles from "./../components/card/component.css";

        export function init() {
          return renderTasks(filterTasks([]));
        }
        "#);
    }
}
