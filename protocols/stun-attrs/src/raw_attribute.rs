//! Raw TLV attribute

use core::fmt;

use crate::{AttrType, Message, StunResult};

/// A Type-Length-Value (TLV) object that can be added to a STUN message.
///
/// `length` is ignored while encoding, the encoder recomputes it from
/// `value`. It still takes part in equality: two attributes carrying the same
/// bytes under different declared lengths are not equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawAttribute {
    pub attr_type: AttrType,
    pub length: u16,
    pub value: Vec<u8>,
}

impl RawAttribute {
    /// Create an attribute whose declared length matches `value`.
    ///
    /// Values longer than `u16::MAX` keep a saturated length and are rejected
    /// when written to a message.
    pub fn new(attr_type: AttrType, value: impl Into<Vec<u8>>) -> Self {
        let value = value.into();
        let length = u16::try_from(value.len()).unwrap_or(u16::MAX);
        Self {
            attr_type,
            length,
            value,
        }
    }

    /// Append this attribute's own value to `m` under its own type
    pub fn add_to(&self, m: &mut Message) -> StunResult<()> {
        m.add(self.attr_type, &self.value)
    }
}

impl fmt::Display for RawAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.attr_type, hex::encode(&self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ATTR_SOFTWARE, ATTR_USERNAME, Error};

    #[test]
    fn test_equal_reflexive_and_symmetric() {
        let a = RawAttribute::new(ATTR_USERNAME, b"alice".to_vec());
        let b = RawAttribute::new(ATTR_USERNAME, b"alice".to_vec());
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn test_type_mismatch_is_unequal() {
        let a = RawAttribute::new(ATTR_USERNAME, b"same".to_vec());
        let b = RawAttribute::new(ATTR_SOFTWARE, b"same".to_vec());
        assert_ne!(a, b);
        assert_ne!(b, a);
    }

    #[test]
    fn test_declared_length_participates_in_equality() {
        let a = RawAttribute {
            attr_type: ATTR_USERNAME,
            length: 3,
            value: b"bob".to_vec(),
        };
        let stale = RawAttribute {
            attr_type: ATTR_USERNAME,
            length: 4,
            value: b"bob".to_vec(),
        };
        assert_ne!(a, stale);
    }

    #[test]
    fn test_value_mismatch_is_unequal() {
        let a = RawAttribute::new(ATTR_USERNAME, vec![1, 2, 3]);
        let shorter = RawAttribute {
            attr_type: ATTR_USERNAME,
            length: 3,
            value: vec![1, 2],
        };
        let different = RawAttribute::new(ATTR_USERNAME, vec![1, 2, 4]);
        assert_ne!(a, shorter);
        assert_ne!(a, different);
    }

    #[test]
    fn test_display() {
        let attr = RawAttribute::new(ATTR_SOFTWARE, vec![0xde, 0xad, 0x01]);
        assert_eq!(attr.to_string(), "SOFTWARE: dead01");

        let unknown = RawAttribute::new(AttrType(0x1234), Vec::new());
        assert_eq!(unknown.to_string(), "0x1234: ");
    }

    #[test]
    fn test_add_to_copies_own_value() {
        let mut m = Message::new();
        m.add(ATTR_SOFTWARE, b"agent").unwrap();

        let attr = RawAttribute::new(ATTR_USERNAME, b"bob".to_vec());
        attr.add_to(&mut m).unwrap();

        assert_eq!(m.get(ATTR_USERNAME), Ok(&b"bob"[..]));
        assert_eq!(m.attributes.len(), 2);
    }

    #[test]
    fn test_add_to_rejects_oversized_value() {
        let attr = RawAttribute::new(ATTR_USERNAME, vec![0u8; u16::MAX as usize + 1]);
        assert_eq!(attr.length, u16::MAX);

        let mut m = Message::new();
        assert_eq!(attr.add_to(&mut m), Err(Error::ValueTooLarge));
        assert!(m.attributes.is_empty());
    }
}
