//! Wrapper element extraction and re-serialization for templating.
//!
//! This crate separates the structural syntax of a single markup element
//! (the "wrapper") from its inner text (the "source") so the text can be
//! inspected, dedented and the wrapper rebuilt with different attributes.
//!
//! # Architecture
//!
//! Construction runs a fixed pipeline: option validation, wrapper-tag
//! matching, content extraction and an optional dedent pass. Afterwards
//! the [`RawElement`] holds plain mutable state — an ordered attribute
//! store and the extracted source — and [`RawElement::wrapper`] is a pure
//! accessor that re-serializes on every read.
//!
//! Only the outermost tag pair is interpreted; nested elements, sibling
//! elements and attributes present in the *input* are treated as opaque
//! content.
//!
//! # Example
//!
//! ```
//! use raw_element::{RawElement, RawElementOptions};
//!
//! # fn main() -> Result<(), raw_element::RawElementError> {
//! let mut element = RawElement::new(
//!     RawElementOptions::new(r#"<div class="x">  content  </div>"#).with_tag("div"),
//! )?;
//!
//! assert_eq!(element.source(), "\ncontent\n");
//!
//! element.set_attribute("id", Some("payload"))?;
//! assert_eq!(element.wrapper(), "<div id=\"payload\">\ncontent\n</div>");
//! # Ok(())
//! # }
//! ```

mod attribute;
mod element;
mod error;
mod format;
mod matcher;
mod options;

pub use attribute::Attribute;
pub use element::RawElement;
pub use error::RawElementError;
pub use options::RawElementOptions;
