//! Error types for attribute operations
//!
//! Two disjoint kinds are used:
//! - [`Error`]: contextless conditions such as an absent attribute, compared
//!   by value.
//! - [`DecodeError`]: malformed wire content, tagged with the place in the
//!   message where decoding failed.

use derive_more::Display;

/// Place parent used for attribute-scoped decode errors
pub const PLACE_ATTRIBUTE: &str = "attribute";
/// Place parent used for message-level decode errors
pub const PLACE_MESSAGE: &str = "message";
/// Place children of the magic cookie field
pub const PLACE_COOKIE: &str = "cookie";

/// Constant errors without diagnostic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Attribute with the requested type does not exist in the message
    #[error("Attribute not found")]
    AttributeNotFound,
    /// Attribute value does not fit the 16-bit length field
    #[error("Attribute value too large")]
    ValueTooLarge,
}

/// Place in a message where a decode error occurred
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Display)]
#[display("{parent}/{children}")]
pub struct DecodeErrPlace {
    pub parent: String,
    pub children: String,
}

impl DecodeErrPlace {
    pub fn new(parent: impl Into<String>, children: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            children: children.into(),
        }
    }

    /// Place of the magic cookie in the message header
    pub fn cookie() -> Self {
        Self::new(PLACE_MESSAGE, PLACE_COOKIE)
    }
}

/// Malformed wire content and the place it was found
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("BadFormat for {place}: {message}")]
pub struct DecodeError {
    pub place: DecodeErrPlace,
    pub message: String,
}

impl DecodeError {
    pub fn new(
        parent: impl Into<String>,
        children: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            place: DecodeErrPlace::new(parent, children),
            message: message.into(),
        }
    }

    /// Error scoped to a single attribute, `children` names the attribute
    pub fn attribute(children: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(PLACE_ATTRIBUTE, children, message)
    }

    /// Reports if the magic cookie value was invalid, i.e. the buffer is
    /// likely not STUN at all
    pub fn is_invalid_cookie(&self) -> bool {
        self.place.parent == PLACE_MESSAGE && self.place.children == PLACE_COOKIE
    }

    /// Reports if the error place is `place`
    pub fn is_place(&self, place: &DecodeErrPlace) -> bool {
        self.place == *place
    }

    /// Reports if the error place parent is `parent`
    pub fn is_place_parent(&self, parent: &str) -> bool {
        self.place.parent == parent
    }

    /// Reports if the error place children is `children`
    pub fn is_place_children(&self, children: &str) -> bool {
        self.place.children == children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_display() {
        let place = DecodeErrPlace::new("message", "cookie");
        assert_eq!(place.to_string(), "message/cookie");
        assert_eq!(DecodeErrPlace::default().to_string(), "/");
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::new("message", "cookie", "0xdeadbeef is invalid magic cookie");
        assert_eq!(
            err.to_string(),
            "BadFormat for message/cookie: 0xdeadbeef is invalid magic cookie"
        );
    }

    #[test]
    fn test_invalid_cookie() {
        let err = DecodeError::new("message", "cookie", "bad cookie");
        assert!(err.is_invalid_cookie());
        assert!(err.is_place(&DecodeErrPlace::cookie()));

        for (parent, children) in [("message", "type"), ("attribute", "cookie"), ("", "")] {
            let err = DecodeError::new(parent, children, "other");
            assert!(!err.is_invalid_cookie(), "{parent}/{children}");
        }
    }

    #[test]
    fn test_partial_place_matching() {
        let err = DecodeError::attribute("XOR-MAPPED-ADDRESS", "unexpected family");
        assert!(err.is_place_parent("attribute"));
        assert!(!err.is_place_parent("message"));
        assert!(err.is_place_children("XOR-MAPPED-ADDRESS"));
        assert!(!err.is_place_children("attribute"));
        assert!(err.is_place(&DecodeErrPlace::new("attribute", "XOR-MAPPED-ADDRESS")));
        assert!(!err.is_place(&DecodeErrPlace::new("attribute", "MAPPED-ADDRESS")));
    }

    #[test]
    fn test_sentinel_compares_by_value() {
        let err = Error::AttributeNotFound;
        assert_eq!(err, Error::AttributeNotFound);
        assert_ne!(err, Error::ValueTooLarge);
        assert_eq!(err.to_string(), "Attribute not found");
    }
}
