//! Ordered list of message attributes

use crate::{AttrType, RawAttribute};

/// Attributes of a message in wire order.
///
/// Duplicate types are kept as-is; lookup returns the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<RawAttribute>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// First attribute of type `t`, or `None` if the list has none
    pub fn get(&self, t: AttrType) -> Option<&RawAttribute> {
        self.0.iter().find(|candidate| candidate.attr_type == t)
    }

    pub fn contains(&self, t: AttrType) -> bool {
        self.get(t).is_some()
    }

    pub fn push(&mut self, attr: RawAttribute) {
        self.0.push(attr);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawAttribute> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RawAttribute] {
        &self.0
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<RawAttribute>> for Attributes {
    fn from(attrs: Vec<RawAttribute>) -> Self {
        Self(attrs)
    }
}

impl FromIterator<RawAttribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = RawAttribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Attributes {
    type Item = RawAttribute;
    type IntoIter = std::vec::IntoIter<RawAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a RawAttribute;
    type IntoIter = std::slice::Iter<'a, RawAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
