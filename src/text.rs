//! Pure line-list utilities.
//!
//! Every strategy and the composite exporter assemble their output from
//! these two primitives. Lines never carry a trailing separator; callers
//! join with `\n` at the very end.

/// One indentation level.
pub const INDENT_UNIT: &str = "    ";

/// Indent a block by one level.
///
/// Empty lines pass through unchanged so intentionally blank separator
/// lines never pick up trailing whitespace.
pub fn indent(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{}", INDENT_UNIT, line)
            }
        })
        .collect()
}

/// Concatenate `prefix` onto the first line and `suffix` onto the last.
///
/// # Panics
///
/// Panics on an empty block; wrapping nothing has no meaning.
pub fn wrap(mut lines: Vec<String>, prefix: &str, suffix: &str) -> Vec<String> {
    assert!(!lines.is_empty(), "wrap requires at least one line");
    lines[0] = format!("{}{}", prefix, lines[0]);
    let last = lines.len() - 1;
    lines[last].push_str(suffix);
    lines
}
