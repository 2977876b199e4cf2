//! Attribute section TLV encoding and decoding
//!
//! Every attribute is laid out as:
//! ```text
//! [type: u16 BE][length: u16 BE][value: length bytes][zero padding to 4 bytes]
//! ```
//! The length field counts the value only, not the padding.

use crate::error::PLACE_MESSAGE;
use crate::{AttrType, Attributes, DecodeError, DecodeLimits, Error, RawAttribute, StunResult};

/// Size of the type and length fields preceding each value
pub const ATTRIBUTE_HEADER_SIZE: usize = 4;

/// Place children for failures in the attribute section as a whole
pub const PLACE_ATTRIBUTES: &str = "attributes";

const PADDING: usize = 4;

/// Nearest multiple of 4 that is not smaller than `len`
pub fn padded_len(len: usize) -> usize {
    (len + PADDING - 1) / PADDING * PADDING
}

/// Append one encoded attribute to `buf`.
///
/// The length field is computed from `value`.
pub fn write_attribute(buf: &mut Vec<u8>, t: AttrType, value: &[u8]) -> StunResult<()> {
    let length = u16::try_from(value.len()).map_err(|_| {
        tracing::warn!("Refusing to encode {}: value is {} bytes", t, value.len());
        Error::ValueTooLarge
    })?;

    buf.reserve(ATTRIBUTE_HEADER_SIZE + padded_len(value.len()));
    buf.extend_from_slice(&t.value().to_be_bytes());
    buf.extend_from_slice(&length.to_be_bytes());
    buf.extend_from_slice(value);
    buf.resize(buf.len() + padded_len(value.len()) - value.len(), 0);

    tracing::debug!("Encoded {} attribute: {} bytes of value", t, length);
    Ok(())
}

/// Decode an attribute section into an attribute list.
///
/// Each decoded attribute keeps the length declared on the wire.
pub fn read_attributes(buf: &[u8], limits: &DecodeLimits) -> Result<Attributes, DecodeError> {
    let mut attrs = Attributes::new();
    let mut offset = 0;

    while offset < buf.len() {
        if attrs.len() == limits.max_attributes {
            return Err(rejected(DecodeError::new(
                PLACE_MESSAGE,
                PLACE_ATTRIBUTES,
                format!("more than {} attributes", limits.max_attributes),
            )));
        }

        let remaining = &buf[offset..];
        if remaining.len() < ATTRIBUTE_HEADER_SIZE {
            return Err(rejected(DecodeError::new(
                PLACE_MESSAGE,
                PLACE_ATTRIBUTES,
                format!(
                    "{} bytes left at offset {}, need {} for attribute header",
                    remaining.len(),
                    offset,
                    ATTRIBUTE_HEADER_SIZE
                ),
            )));
        }

        let attr_type = AttrType(u16::from_be_bytes([remaining[0], remaining[1]]));
        let length = u16::from_be_bytes([remaining[2], remaining[3]]);

        if length > limits.max_value_len {
            return Err(rejected(DecodeError::attribute(
                attr_type.to_string(),
                format!("length {} exceeds limit {}", length, limits.max_value_len),
            )));
        }

        let body = &remaining[ATTRIBUTE_HEADER_SIZE..];
        let padded = padded_len(length as usize);
        if body.len() < padded {
            return Err(rejected(DecodeError::attribute(
                attr_type.to_string(),
                format!(
                    "buffer length {} is less than {} (expected value size with padding)",
                    body.len(),
                    padded
                ),
            )));
        }

        attrs.push(RawAttribute {
            attr_type,
            length,
            value: body[..length as usize].to_vec(),
        });
        offset += ATTRIBUTE_HEADER_SIZE + padded;
    }

    tracing::debug!("Decoded {} attributes from {} bytes", attrs.len(), buf.len());
    Ok(attrs)
}

fn rejected(err: DecodeError) -> DecodeError {
    tracing::warn!("{}", err);
    err
}
