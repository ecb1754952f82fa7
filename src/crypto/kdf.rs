//! src/crypto/kdf.rs

use crate::aliases::{Aes256Key32, HmacSha256, PasswordString, Salt16};
use crate::consts::PBKDF2_ITERATIONS;
use crate::error::DecryptError;

use pbkdf2::pbkdf2;
use secure_gate::{RevealSecret, RevealSecretMut};

/// Derive the AES-256 envelope key directly into the caller's buffer.
///
/// PBKDF2-HMAC-SHA256 with the format's fixed 10 000 iterations, 32-byte
/// output. Deterministic: the same password and salt always produce the same
/// key, byte for byte. The password is consumed as raw UTF-8 bytes.
///
/// The salt is exactly 16 bytes by construction ([`Salt16`]); the orchestrator
/// guarantees this when parsing the envelope.
#[inline(always)]
pub fn derive_envelope_key(
    password: &PasswordString,
    salt: &Salt16,
    out_key: &mut Aes256Key32,
) -> Result<(), DecryptError> {
    pbkdf2::<HmacSha256>(
        password.expose_secret().as_bytes(),
        salt.expose_secret(),
        PBKDF2_ITERATIONS,
        out_key.expose_secret_mut(),
    )
    .map_err(|e| DecryptError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(())
}
