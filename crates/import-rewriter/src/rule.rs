//! Import rules: a match pattern plus a reconstruction template.

use crate::error::RuleError;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Name of the capture group holding the import path.
const PATH_CAPTURE: &str = "path";

/// A piece of a reconstruction template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Capture(String),
}

/// A textual import convention.
///
/// The pattern must define a named `path` group. The template rebuilds a
/// matched statement from `{name}` placeholders, one per capture group; the
/// `{path}` placeholder receives the rewritten path.
#[derive(Debug, Clone)]
pub struct ImportRule {
    name: String,
    pattern: Regex,
    template: Vec<Segment>,
}

impl ImportRule {
    /// Builds a rule, validating the pattern and template against each other.
    pub fn new(name: &str, pattern: &str, template: &str) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;

        let has_capture = |capture: &str| pattern.capture_names().flatten().any(|n| n == capture);
        if !has_capture(PATH_CAPTURE) {
            return Err(RuleError::MissingPathCapture {
                rule: name.to_string(),
            });
        }

        let template = parse_template(name, template)?;
        for segment in &template {
            if let Segment::Capture(capture) = segment {
                if !has_capture(capture) {
                    return Err(RuleError::UnknownCapture {
                        rule: name.to_string(),
                        name: capture.clone(),
                    });
                }
            }
        }

        Ok(Self {
            name: name.to_string(),
            pattern,
            template,
        })
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rewrites every match in `content`.
    ///
    /// `map_path` receives each matched path; returning `None` (or the same
    /// path) leaves that statement byte-identical.
    pub fn rewrite<'t, F>(&self, content: &'t str, mut map_path: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> Option<String>,
    {
        self.pattern.replace_all(content, |caps: &Captures| {
            let whole = &caps[0];
            let Some(path) = caps.name(PATH_CAPTURE) else {
                return whole.to_string();
            };
            match map_path(path.as_str()) {
                Some(new_path) if new_path != path.as_str() => self.render(caps, &new_path),
                _ => whole.to_string(),
            }
        })
    }

    /// Returns whether the rule matches anywhere in `content`.
    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }

    fn render(&self, caps: &Captures, new_path: &str) -> String {
        let mut output = String::new();
        for segment in &self.template {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Capture(name) if name == PATH_CAPTURE => output.push_str(new_path),
                Segment::Capture(name) => {
                    output.push_str(caps.name(name).map_or("", |m| m.as_str()));
                }
            }
        }
        output
    }
}

/// Splits a template such as `from{gap}{quote}{path}{quote}` into segments.
fn parse_template(rule: &str, template: &str) -> Result<Vec<Segment>, RuleError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '{' {
            literal.push(c);
            continue;
        }

        let mut name = String::new();
        let mut closed = false;
        for next in chars.by_ref() {
            if next == '}' {
                closed = true;
                break;
            }
            name.push(next);
        }
        if !closed {
            return Err(RuleError::UnterminatedPlaceholder {
                rule: rule.to_string(),
            });
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Capture(name));
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn require_rule() -> ImportRule {
        ImportRule::new(
            "require",
            r#"require\((?P<quote>['"])(?P<path>[^'"]+)['"]\)"#,
            "require({quote}{path}{quote})",
        )
        .unwrap()
    }

    #[test]
    fn test_parse_template() {
        let segments = parse_template("t", "from{gap}{quote}{path}{quote}").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal("from".to_string()),
                Segment::Capture("gap".to_string()),
                Segment::Capture("quote".to_string()),
                Segment::Capture("path".to_string()),
                Segment::Capture("quote".to_string()),
            ]
        );
    }

    #[test]
    fn test_rewrite_only_changes_path() {
        let rule = require_rule();
        let output = rule.rewrite("const a = require('./a');", |p| Some(format!("{p}.cjs")));
        assert_eq!(output, "const a = require('./a.cjs');");
    }

    #[test]
    fn test_none_leaves_match_untouched() {
        let rule = require_rule();
        let input = "require(\"./a\"); require('./b');";
        let output = rule.rewrite(input, |p| (p == "./b").then(|| "./c".to_string()));
        assert_eq!(output, "require(\"./a\"); require('./c');");
    }

    #[test]
    fn test_no_match_borrows() {
        let rule = require_rule();
        let output = rule.rewrite("import x from 'y';", |_| Some("z".to_string()));
        assert!(matches!(output, Cow::Borrowed(_)));
        assert!(!rule.is_match("import x from 'y';"));
    }

    #[test]
    fn test_missing_path_capture() {
        let err = ImportRule::new("bad", r"import (?P<name>\w+)", "import {name}").unwrap_err();
        assert!(matches!(err, RuleError::MissingPathCapture { .. }));
    }

    #[test]
    fn test_unknown_capture() {
        let err = ImportRule::new("bad", r"from '(?P<path>[^']+)'", "from {quote}{path}").unwrap_err();
        assert!(matches!(err, RuleError::UnknownCapture { ref name, .. } if name == "quote"));
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = ImportRule::new("bad", r"from '(?P<path>[^']+)'", "from '{path").unwrap_err();
        assert!(matches!(err, RuleError::UnterminatedPlaceholder { .. }));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ImportRule::new("bad", r"from (?P<path>", "{path}").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().starts_with("invalid pattern for rule `bad`"));
    }
}
