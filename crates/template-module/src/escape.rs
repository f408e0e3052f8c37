//! Template literal escaping.

/// Escapes text for embedding between template literal backticks.
///
/// Backticks, backslashes and every `${` interpolation start are prefixed
/// with a backslash. A lone `$` is left as is.
pub fn escape_template_literal(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => output.push_str("\\\\"),
            '`' => output.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => output.push_str("\\$"),
            _ => output.push(c),
        }
    }

    output
}

/// Reverses [`escape_template_literal`].
///
/// Only the three escapes produced by the escaper are recognized; any other
/// backslash is kept verbatim.
pub fn unescape_template_literal(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '\\' | '`' | '$') {
                    output.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        output.push(c);
    }

    output
}
