//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, DecryptError>`](DecryptError).
//!
//! The variants separate caller-recoverable input problems from cryptographic
//! failure: callers react differently to a wrong password than to corrupt
//! input or a malformed request, so the kinds never collapse into each other.

use thiserror::Error;

/// The error type for all envelope decryption operations.
#[derive(Debug, Error)]
pub enum DecryptError {
    /// The envelope text or the password was empty.
    ///
    /// A usage error, not a cryptographic failure: prompt the caller again.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The envelope text is not valid standard base64.
    ///
    /// Covers characters outside `A-Za-z0-9+/` as well as incorrect `=`
    /// padding length.
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The decoded envelope is shorter than the 32-byte salt + IV prefix.
    #[error("envelope too short: {actual} bytes, need at least 32")]
    EnvelopeTooShort { actual: usize },

    /// The ciphertext region is empty or not a multiple of the AES block size.
    ///
    /// A caller/data error, not a cryptographic failure: the data is
    /// truncated or was never produced by the envelope format.
    #[error("invalid ciphertext layout: {0}")]
    InvalidCiphertextLayout(String),

    /// The underlying KDF primitive rejected its parameters.
    ///
    /// Not recoverable by retrying with the same inputs; indicates a
    /// provider/environment problem.
    #[error("key derivation failed: {0}")]
    KeyDerivationFailed(String),

    /// PKCS#7 unpadding failed after block decryption.
    ///
    /// The dominant failure when the password is wrong; occasionally corrupt
    /// ciphertext. No partial plaintext is ever returned alongside this.
    #[error("decryption failed: wrong password or corrupted data")]
    DecryptionFailed,

    /// The decrypted bytes are not valid UTF-8.
    ///
    /// Like [`DecryptError::DecryptionFailed`], this usually signals a wrong
    /// password: a wrong key produces garbage that fails UTF-8 decoding. The
    /// variant deliberately carries no payload so the garbage plaintext is
    /// never retained in an error value.
    #[error("decrypted data is not valid UTF-8")]
    PlaintextNotUtf8,
}
