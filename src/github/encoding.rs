//! Base64 transport encoding for file content.
//!
//! The contents API takes the standard alphabet with padding and no line
//! wrapping.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode text as base64 of its UTF-8 bytes.
#[must_use]
pub fn encode_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a base64 payload back to raw bytes.
///
/// The API returns content wrapped at 60 columns, so ASCII whitespace is
/// stripped before decoding.
pub fn decode_content(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(compact)
}
