use regex::Regex;
use std::sync::LazyLock;

static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[([0-9]{1,3}(;[0-9]{1,3})*)?[m|K]").unwrap());

/// Number of terminal columns `text` occupies.
///
/// Color and erase-line sequences take no space. Every Unicode scalar value
/// counts as one column, so a supplementary-plane character is a single
/// column.
pub fn visual_width(text: &str) -> usize {
    ANSI_REGEX.replace_all(text, "").chars().count()
}

/// Right-pad `text` with spaces up to a visual width of `width`. Wider text is
/// returned as-is.
pub fn pad(width: usize, text: &str) -> String {
    let current = visual_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(current));
    out.push_str(text);
    if current < width {
        out.extend(std::iter::repeat_n(' ', width - current));
    }
    out
}
