//! Ordered attribute storage for the wrapper tag.

/// A single `name="value"` pair on the wrapper tag.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Attribute name as written on the tag.
    pub name: String,
    /// Attribute value, serialized double-quoted.
    pub value: String,
}

/// Ordered, name-unique attribute store.
///
/// First-insertion order is preserved and in-place updates keep the
/// original position. Lookup is a linear scan, which is fine at
/// element-tag scale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|attr| attr.name == name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Replace the value in place when the name exists, append otherwise.
    pub(crate) fn upsert(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.0.iter_mut().find(|attr| attr.name == name) {
            attr.value = value.to_owned();
        } else {
            self.0.push(Attribute {
                name: name.to_owned(),
                value: value.to_owned(),
            });
        }
    }

    /// Remove the named entry. Returns whether an entry was removed.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|attr| attr.name != name);
        self.0.len() != before
    }

    pub(crate) fn as_slice(&self) -> &[Attribute] {
        &self.0
    }
}
