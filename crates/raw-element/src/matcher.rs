//! Wrapper tag matching and inner content extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RawElementError;

/// Matches a single outer element: start tag (attribute text tolerated),
/// inner content, end tag, anchored to the whole string. Tag names match
/// case-insensitively. The content capture is non-greedy, so together with
/// the end anchor the pair spans from the first start tag to the last end
/// tag of that name — nested same-name tags stay inside the content.
static WRAPPER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^\s*<([a-z][a-z0-9_-]*)(?:\s[^>]*)?>\n?(.*?)</([a-z][a-z0-9_-]*)>\s*$")
        .unwrap()
});

/// Match the outer wrapper pair against `data` and extract the inner
/// content.
///
/// `data` must already be trimmed and newline-normalized. An optional
/// single newline immediately after the start tag is not part of the
/// result.
pub(crate) fn extract(data: &str, tag: &str) -> Result<String, RawElementError> {
    let Some(captures) = WRAPPER_RE.captures(data) else {
        tracing::debug!(tag, "no outer wrapper pair in data");
        return Err(RawElementError::TagMismatch {
            expected: tag.to_owned(),
        });
    };

    let start = &captures[1];
    let end = &captures[3];

    if !start.eq_ignore_ascii_case(end) || !start.eq_ignore_ascii_case(tag) {
        tracing::debug!(tag, start, end, "wrapper tag names disagree");
        return Err(RawElementError::TagMismatch {
            expected: tag.to_owned(),
        });
    }

    Ok(captures[2].to_owned())
}
