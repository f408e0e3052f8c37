//! Relative path ascent collapsing.

const ASCENT: &str = "../";

/// Counts the leading `../` segments of a relative path.
pub fn leading_ascents(path: &str) -> usize {
    let mut count = 0;
    let mut rest = path;
    while let Some(stripped) = rest.strip_prefix(ASCENT) {
        count += 1;
        rest = stripped;
    }
    count
}

/// Removes exactly one level of leading ascent from a relative path.
///
/// The result is rooted at `./`: one ascent becomes `./rest`, `n` ascents
/// become `./` followed by `n - 1` ascents and the rest. Paths without a
/// leading ascent return `None`.
pub fn collapse_ascent(path: &str) -> Option<String> {
    let count = leading_ascents(path);
    if count == 0 {
        return None;
    }

    let rest = &path[count * ASCENT.len()..];
    Some(format!("./{}{}", ASCENT.repeat(count - 1), rest))
}
