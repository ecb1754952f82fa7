//! Base64 decoding of the envelope text.
//!
//! The envelope travels as standard base64 (alphabet `A-Za-z0-9+/` with `=`
//! padding). Decoding reproduces the encoded payload byte for byte; nothing
//! is trimmed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::DecryptError;

/// Decode the base64 envelope text into raw bytes.
///
/// # Errors
///
/// [`DecryptError::InvalidEncoding`] if the text contains characters outside
/// the standard alphabet or has an incorrect padding length.
pub fn decode_envelope(base64_text: &str) -> Result<Vec<u8>, DecryptError> {
    Ok(STANDARD.decode(base64_text)?)
}
