//! The raw element aggregate.

use std::fmt;

use crate::attribute::{Attribute, AttributeList};
use crate::error::RawElementError;
use crate::format::dedent;
use crate::matcher;
use crate::options::RawElementOptions;

/// Inner text of a single markup element, with a mutable attribute set on
/// the wrapper tag.
///
/// Construction runs a fixed pipeline: the options are validated, the
/// outer tag pair is matched and stripped, and the remaining content is
/// optionally dedented. Afterwards the attributes can be mutated freely
/// and [`wrapper`](Self::wrapper) re-serializes the element on every read.
///
/// # Example
///
/// ```
/// use raw_element::{RawElement, RawElementOptions};
///
/// # fn main() -> Result<(), raw_element::RawElementError> {
/// let mut element = RawElement::new(
///     RawElementOptions::new("<div>\n    Hello\n</div>").with_tag("div"),
/// )?;
///
/// assert_eq!(element.source(), "\nHello\n");
///
/// element.set_attribute("class", Some("greeting"))?;
/// assert_eq!(element.wrapper(), "<div class=\"greeting\">\nHello\n</div>");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RawElement {
    tag: Option<String>,
    source: String,
    attributes: AttributeList,
}

impl RawElement {
    /// Parse `options.data` into an element.
    ///
    /// When a tag is configured, the input must consist of a single outer
    /// `<tag>...</tag>` pair (attributes on the start tag are tolerated,
    /// tag names match case-insensitively). Without a tag the input is
    /// kept as bare text and attribute operations become errors.
    ///
    /// # Errors
    ///
    /// Returns [`RawElementError::MissingData`] for empty input,
    /// [`RawElementError::MissingTag`] for an empty tag and
    /// [`RawElementError::TagMismatch`] when the wrapper is absent,
    /// malformed or its tag names disagree.
    pub fn new(options: RawElementOptions) -> Result<Self, RawElementError> {
        options.validate()?;

        let data = options.data.replace("\r\n", "\n");
        let data = data.trim();

        let source = if let Some(tag) = &options.tag {
            let content = matcher::extract(data, tag)?;
            let content = if options.format {
                dedent(&content).trim().to_owned()
            } else {
                content
            };
            tracing::trace!(tag = %tag, len = content.len(), "extracted wrapper content");
            format!("\n{content}\n")
        } else if options.format {
            dedent(data)
        } else {
            data.to_owned()
        };

        Ok(Self {
            tag: options.tag,
            source,
            attributes: AttributeList::default(),
        })
    }

    /// The wrapper tag name, if one was configured.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Current inner text.
    ///
    /// For tagged elements the text carries exactly one leading and one
    /// trailing newline; for untagged elements it is the trimmed,
    /// newline-normalized input.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Re-serialize the element.
    ///
    /// Recomputed on every read from the tag, the attribute store and the
    /// source text. Untagged elements serialize to their bare text.
    ///
    /// # Example
    ///
    /// ```
    /// use raw_element::{RawElement, RawElementOptions};
    ///
    /// # fn main() -> Result<(), raw_element::RawElementError> {
    /// let element = RawElement::new(
    ///     RawElementOptions::new("<div>Hello</div>")
    ///         .with_tag("div")
    ///         .with_format(false),
    /// )?;
    /// assert_eq!(element.wrapper(), "<div>\nHello\n</div>");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn wrapper(&self) -> String {
        let Some(tag) = &self.tag else {
            return self.source.clone();
        };

        let attrs: String = self
            .attributes
            .as_slice()
            .iter()
            .map(|attr| format!(r#" {}="{}""#, attr.name, attr.value))
            .collect();

        format!("<{tag}{attrs}>{}</{tag}>", self.source)
    }

    /// Whether an attribute with the given name exists.
    ///
    /// # Errors
    ///
    /// Returns [`RawElementError::AttributesRequireWrapper`] on an
    /// untagged element.
    pub fn has_attribute(&self, name: &str) -> Result<bool, RawElementError> {
        self.require_tag()?;
        Ok(self.attributes.contains(name))
    }

    /// The value of the named attribute, if present.
    ///
    /// # Errors
    ///
    /// Returns [`RawElementError::AttributesRequireWrapper`] on an
    /// untagged element.
    pub fn get_attribute(&self, name: &str) -> Result<Option<&str>, RawElementError> {
        self.require_tag()?;
        Ok(self.attributes.get(name))
    }

    /// Set, replace or delete an attribute.
    ///
    /// `Some(value)` upserts: an existing attribute keeps its position and
    /// gets the new value, a new one is appended. `None` deletes. Returns
    /// whether a mutation took place; an empty `name` never mutates.
    ///
    /// # Errors
    ///
    /// Returns [`RawElementError::AttributesRequireWrapper`] on an
    /// untagged element.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: Option<&str>,
    ) -> Result<bool, RawElementError> {
        self.require_tag()?;

        if name.is_empty() {
            return Ok(false);
        }

        Ok(match value {
            Some(value) => {
                self.attributes.upsert(name, value);
                true
            }
            None => self.attributes.remove(name),
        })
    }

    /// Delete an attribute. Alias for `set_attribute(name, None)`.
    ///
    /// # Errors
    ///
    /// Returns [`RawElementError::AttributesRequireWrapper`] on an
    /// untagged element.
    pub fn remove_attribute(&mut self, name: &str) -> Result<bool, RawElementError> {
        self.set_attribute(name, None)
    }

    /// Ordered read-only view of the attribute store.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        self.attributes.as_slice()
    }

    fn require_tag(&self) -> Result<(), RawElementError> {
        if self.tag.is_none() {
            return Err(RawElementError::AttributesRequireWrapper);
        }
        Ok(())
    }
}

impl fmt::Display for RawElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wrapper())
    }
}
