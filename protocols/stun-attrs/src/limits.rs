//! Decoder limits

use serde::Deserialize;

const DEFAULT_MAX_ATTRIBUTES: usize = 128;

/// Bounds applied while decoding an attribute section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Maximum number of attributes accepted in one message
    pub max_attributes: usize,
    /// Maximum declared length of a single attribute value
    pub max_value_len: u16,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
            max_value_len: u16::MAX,
        }
    }
}
