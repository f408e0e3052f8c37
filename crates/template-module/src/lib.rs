//! Markup and style component to script module conversion.
//!
//! A component directory holds at most one `template.html` and one
//! `component.css`. This crate turns the text of either file into a script
//! module that exports the content as a template literal:
//! - Recognizing convertible assets by exact file name
//! - Escaping content so it survives embedding in a template literal
//! - Emitting the constant declaration and its default export
//!
//! # Example
//!
//! ```
//! use template_module::{to_module, AssetKind};
//!
//! assert_eq!(AssetKind::from_file_name("template.html"), Some(AssetKind::Markup));
//!
//! let module = to_module("  <p>${name}</p>\n");
//! assert_eq!(module, "const template = `<p>\\${name}</p>`;\nexport default template;");
//! ```

mod asset;
mod escape;
mod module;

pub use asset::{is_generated_module, module_path, AssetKind, GENERATED_SUFFIXES, MODULE_SUFFIX};
pub use escape::{escape_template_literal, unescape_template_literal};
pub use module::{extract_template, to_module, EXPORT_BINDING};
