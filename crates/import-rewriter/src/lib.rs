//! Pattern-based import rewriting for template build trees.
//!
//! Script and style files are never parsed. Each import convention is an
//! [`ImportRule`]: a regular expression with a named `path` capture plus a
//! reconstruction template. Rewriting only ever replaces the `path` portion
//! of a match; keywords, whitespace and quotes are carried through.
//!
//! Two rewrites are built on top of the rules:
//! - [`normalize_imports`] collapses one level of `../` ascent in relative
//!   imports (used for page sources in development builds)
//! - [`rewrite_references`] points imports of `template.html` and
//!   `component.css` at their generated `.js` modules
//!
//! # Example
//!
//! ```
//! use import_rewriter::{normalize_imports, rewrite_references, SourceKind};
//!
//! let script = "import template from './template.html';\nimport '../../shared/util.js';";
//! assert_eq!(
//!     rewrite_references(script),
//!     "import template from './template.html.js';\nimport '../../shared/util.js';"
//! );
//!
//! let style = "@import '../../shared/base.css';";
//! assert_eq!(
//!     normalize_imports(SourceKind::Stylesheet, style),
//!     "@import './../shared/base.css';"
//! );
//! ```

mod ascent;
mod error;
mod normalize;
mod reference;
mod rule;

pub use ascent::{collapse_ascent, leading_ascents};
pub use error::RuleError;
pub use normalize::{normalize_imports, SourceKind};
pub use reference::{reference_rule, rewrite_references};
pub use rule::ImportRule;
