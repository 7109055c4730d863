//! Error types for raw element construction and mutation.

/// Error from [`RawElement`](crate::RawElement) construction or attribute
/// operations.
///
/// Construction either fully succeeds or fully fails; there is no
/// partial-success state. Attribute operations fail hard only on the
/// structural precondition (no wrapper tag) — malformed arguments degrade
/// to an `Ok(false)` return instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RawElementError {
    /// Input data is empty.
    #[error("data must be a non-empty string")]
    MissingData,

    /// A wrapper tag was supplied but it is empty.
    #[error("tag must be a non-empty string")]
    MissingTag,

    /// Wrapper absent, malformed, or start/end tag names disagree with
    /// each other or with the configured tag.
    #[error("data is not wrapped in a matching <{expected}> element")]
    TagMismatch {
        /// The configured wrapper tag name.
        expected: String,
    },

    /// Attribute operation attempted on an untagged element.
    #[error("attributes require a wrapper tag")]
    AttributesRequireWrapper,
}
