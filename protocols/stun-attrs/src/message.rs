//! Message attribute accessor
//!
//! [`Message`] owns the attribute list and the encoded attribute section of a
//! STUN message. The header is handled by the envelope layer.

use crate::codec::{read_attributes, write_attribute};
use crate::{AttrType, Attributes, DecodeError, DecodeLimits, Error, RawAttribute, StunResult};

/// Attribute-carrying part of a STUN message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// Decoded or added attributes in wire order
    pub attributes: Attributes,
    /// Encoded attribute section
    pub raw: Vec<u8>,
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an encoded attribute section
    pub fn from_raw(raw: Vec<u8>, limits: &DecodeLimits) -> Result<Self, DecodeError> {
        let attributes = read_attributes(&raw, limits)?;
        Ok(Self { attributes, raw })
    }

    /// Append an attribute with type `t` and value `v`
    pub fn add(&mut self, t: AttrType, v: &[u8]) -> StunResult<()> {
        write_attribute(&mut self.raw, t, v)?;
        self.attributes.push(RawAttribute::new(t, v));
        Ok(())
    }

    /// Value of the first attribute of type `t`.
    ///
    /// Returns [`Error::AttributeNotFound`] if there is no such attribute.
    pub fn get(&self, t: AttrType) -> StunResult<&[u8]> {
        self.attributes
            .get(t)
            .map(|attr| attr.value.as_slice())
            .ok_or(Error::AttributeNotFound)
    }

    pub fn contains(&self, t: AttrType) -> bool {
        self.attributes.contains(t)
    }

    /// Drop all attributes so the message can be reused
    pub fn reset(&mut self) {
        self.raw.clear();
        self.attributes.clear();
    }
}
