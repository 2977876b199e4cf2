//! STUN Attribute Model
//!
//! This crate provides the attribute layer of a STUN (RFC 5389 family) message:
//! the registry of attribute type codes, TLV (Type-Length-Value) attributes, the
//! ordered attribute list carried by a message, and the error types used by
//! decoders to report *where* in a message parsing failed.
//!
//! The message header (magic cookie, transaction ID) and attribute-specific
//! payload semantics live in collaborating crates; this crate only deals with
//! in-memory attribute values and the encoded attribute section.

pub mod attribute_list;
pub mod attributes;
pub mod codec;
pub mod error;
pub mod limits;
pub mod message;
pub mod raw_attribute;


pub use attribute_list::Attributes;
pub use attributes::*;
pub use codec::{padded_len, read_attributes, write_attribute, ATTRIBUTE_HEADER_SIZE};
pub use error::{DecodeErrPlace, DecodeError, Error};
pub use limits::DecodeLimits;
pub use message::Message;
pub use raw_attribute::RawAttribute;

/// Result type for operations failing with a sentinel [`Error`]
pub type StunResult<T> = Result<T, Error>;
