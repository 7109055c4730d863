//! Indentation normalization for extracted content.

/// Strip the first line's leading-whitespace run from every line that
/// carries it.
///
/// The first content line's indentation is the reference column: a line
/// that begins with exactly that prefix loses it, every other line passes
/// through unmodified. Callers control normalization by how the first line
/// is indented in the source snippet.
pub(crate) fn dedent(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let first = text.split('\n').next().unwrap_or_default();
    let prefix = &first[..first.len() - first.trim_start().len()];

    if prefix.is_empty() {
        return text.to_owned();
    }

    text.split('\n')
        .map(|line| line.strip_prefix(prefix).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dedent_common_prefix() {
        assert_eq!(dedent("    a\n    b\n    c"), "a\nb\nc");
    }

    #[test]
    fn test_dedent_is_noop_without_leading_whitespace() {
        assert_eq!(dedent("a\n    b"), "a\n    b");
    }

    #[test]
    fn test_dedent_idempotent() {
        let once = dedent("  a\n  b");
        assert_eq!(dedent(&once), once);
    }

    #[test]
    fn test_dedent_leaves_non_matching_lines() {
        // Second line is indented with fewer spaces than the reference
        // column, so it keeps its own indentation.
        assert_eq!(dedent("    a\n  b\n    c"), "a\n  b\nc");
    }

    #[test]
    fn test_dedent_empty() {
        assert_eq!(dedent(""), "");
    }

    #[test]
    fn test_dedent_single_line() {
        assert_eq!(dedent("    indented"), "indented");
    }

    #[test]
    fn test_dedent_tab_prefix() {
        assert_eq!(dedent("\ta\n\tb"), "a\nb");
    }

    #[test]
    fn test_dedent_blank_lines_kept() {
        assert_eq!(dedent("  a\n\n  b"), "a\n\nb");
    }

    #[test]
    fn test_dedent_deeper_lines_keep_remainder() {
        assert_eq!(dedent("  a\n    b"), "a\n  b");
    }
}
