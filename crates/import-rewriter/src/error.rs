//! Rule construction errors.

use thiserror::Error;

/// An error building an [`ImportRule`](crate::ImportRule).
#[derive(Debug, Error)]
pub enum RuleError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern for rule `{rule}`: {source}")]
    InvalidPattern {
        /// The rule name.
        rule: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The pattern has no `path` capture group.
    #[error("rule `{rule}` has no `path` capture group")]
    MissingPathCapture {
        /// The rule name.
        rule: String,
    },

    /// The template references a capture the pattern does not define.
    #[error("rule `{rule}` template references unknown capture `{name}`")]
    UnknownCapture {
        /// The rule name.
        rule: String,
        /// The unknown capture name.
        name: String,
    },

    /// The template has an opening `{` without a closing `}`.
    #[error("rule `{rule}` template has an unterminated placeholder")]
    UnterminatedPlaceholder {
        /// The rule name.
        rule: String,
    },
}
