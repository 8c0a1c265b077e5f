//! Shared text normalisation helpers for the merge test suites.
//!
//! Rendered declarations are compared line by line after trimming, so
//! assertions are insensitive to indentation and blank lines; only the
//! significant content of each line matters.

/// Splits `source` into trimmed, non-empty lines.
///
/// # Examples
///
/// ```
/// use test_helpers::text::significant_lines;
///
/// let lines = significant_lines("class a {\n    private b = 1;\n\n}\n");
/// assert_eq!(lines, ["class a {", "private b = 1;", "}"]);
/// ```
#[must_use]
pub fn significant_lines(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns `true` when `source` contains `line` as a trimmed line of its
/// own.
#[must_use]
pub fn has_line(source: &str, line: &str) -> bool {
    source.lines().any(|candidate| candidate.trim() == line)
}
