//! Construction options for [`RawElement`](crate::RawElement).

use crate::error::RawElementError;

/// Configuration for constructing a [`RawElement`](crate::RawElement).
///
/// # Example
///
/// ```
/// use raw_element::RawElementOptions;
///
/// let options = RawElementOptions::new("<div>Hello</div>")
///     .with_tag("div")
///     .with_format(false);
/// assert_eq!(options.tag.as_deref(), Some("div"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawElementOptions {
    /// Raw markup or bare text to parse.
    pub data: String,
    /// Wrapper tag name. `None` switches the element into untagged mode:
    /// no wrapper validation, no attribute support.
    pub tag: Option<String>,
    /// Whether to dedent the extracted content.
    ///
    /// Default: `true`
    pub format: bool,
}

impl RawElementOptions {
    /// Create options for the given raw data, with formatting enabled and
    /// no wrapper tag.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            tag: None,
            format: true,
        }
    }

    /// Set the wrapper tag name.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Enable or disable the dedent pass.
    #[must_use]
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    /// Fail fast before any parsing occurs.
    pub(crate) fn validate(&self) -> Result<(), RawElementError> {
        if self.data.is_empty() {
            return Err(RawElementError::MissingData);
        }

        match &self.tag {
            Some(tag) if tag.is_empty() => Err(RawElementError::MissingTag),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RawElementOptions::new("x");
        assert_eq!(options.tag, None);
        assert!(options.format);
    }

    #[test]
    fn test_validate_ok() {
        assert!(RawElementOptions::new("x").validate().is_ok());
        assert!(
            RawElementOptions::new("<div>x</div>")
                .with_tag("div")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_validate_missing_data() {
        assert!(matches!(
            RawElementOptions::new("").validate(),
            Err(RawElementError::MissingData)
        ));
    }

    #[test]
    fn test_validate_missing_tag() {
        assert!(matches!(
            RawElementOptions::new("x").with_tag("").validate(),
            Err(RawElementError::MissingTag)
        ));
    }
}
