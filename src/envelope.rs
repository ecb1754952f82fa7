//! Envelope layout parsing.
//!
//! A decoded envelope is three contiguous regions: a 16-byte KDF salt, a
//! 16-byte CBC initialization vector, and the remaining ciphertext.

use crate::aliases::{Iv16, Salt16};
use crate::consts::{IV_LEN, MIN_ENVELOPE_LEN, SALT_LEN};
use crate::error::DecryptError;

/// A parsed `[salt:16][iv:16][ciphertext]` envelope.
///
/// Value-like: each instance is owned by the single decryption call that
/// parsed it. The salt and IV land in zeroizing buffers; the ciphertext is
/// public data and stays a plain `Vec<u8>`.
#[derive(Debug)]
pub struct EncryptedEnvelope {
    salt: Salt16,
    iv: Iv16,
    ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Split decoded envelope bytes into salt, IV and ciphertext.
    ///
    /// The only check here is the 32-byte floor for the two fixed regions.
    /// The ciphertext block-size invariant belongs to the cipher layer.
    ///
    /// # Errors
    ///
    /// [`DecryptError::EnvelopeTooShort`] if `bytes` cannot hold salt + IV.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecryptError> {
        if bytes.len() < MIN_ENVELOPE_LEN {
            return Err(DecryptError::EnvelopeTooShort {
                actual: bytes.len(),
            });
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&bytes[SALT_LEN..SALT_LEN + IV_LEN]);

        Ok(Self {
            salt: Salt16::from(salt),
            iv: Iv16::from(iv),
            ciphertext: bytes[MIN_ENVELOPE_LEN..].to_vec(),
        })
    }

    /// The 16-byte KDF salt.
    pub fn salt(&self) -> &Salt16 {
        &self.salt
    }

    /// The 16-byte CBC initialization vector.
    pub fn iv(&self) -> &Iv16 {
        &self.iv
    }

    /// The ciphertext region (may be empty; length is validated by the
    /// cipher layer).
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}
