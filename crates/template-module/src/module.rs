//! Generated module emission.

use crate::escape::{escape_template_literal, unescape_template_literal};

/// Name of the constant bound to the template content.
pub const EXPORT_BINDING: &str = "template";

/// Converts asset text into a script module.
///
/// The content is trimmed and escaped, bound to [`EXPORT_BINDING`] and
/// exported as the module default.
pub fn to_module(content: &str) -> String {
    let escaped = escape_template_literal(content.trim());
    format!("{}{}{}", module_prefix(), escaped, module_suffix())
}

/// Recovers the original (trimmed) content from a generated module.
///
/// Returns `None` when the text does not have the exact shape produced by
/// [`to_module`].
pub fn extract_template(module: &str) -> Option<String> {
    let body = module
        .strip_prefix(module_prefix().as_str())?
        .strip_suffix(module_suffix().as_str())?;
    Some(unescape_template_literal(body))
}

fn module_prefix() -> String {
    format!("const {} = `", EXPORT_BINDING)
}

fn module_suffix() -> String {
    format!("`;\nexport default {};", EXPORT_BINDING)
}
