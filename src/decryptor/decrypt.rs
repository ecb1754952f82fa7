//! src/decryptor/decrypt.rs
//! Envelope decryption — decode, split, derive, decrypt, UTF-8.

use secure_gate::RevealSecret;
use tracing::debug;

use crate::aliases::{Aes256Key32, PasswordString};
use crate::crypto::cipher::decrypt_blocks;
use crate::crypto::kdf::derive_envelope_key;
use crate::encoding::decode_envelope;
use crate::envelope::EncryptedEnvelope;
use crate::error::DecryptError;

/// Decrypt a base64 `[salt:16][iv:16][ciphertext]` envelope with a password.
///
/// Single-shot and stateless: the envelope, password and derived key are
/// owned by this call alone, nothing is cached across calls, and a failure at
/// any stage is final. Concurrent calls need no coordination. The derived key
/// lives in a zeroizing buffer for the duration of the call.
///
/// # Errors
///
/// See [`DecryptError`] for the full taxonomy. A wrong password surfaces as
/// [`DecryptError::DecryptionFailed`] or [`DecryptError::PlaintextNotUtf8`];
/// it never silently returns garbage.
pub fn decrypt(base64_data: &str, password: &PasswordString) -> Result<String, DecryptError> {
    if base64_data.is_empty() {
        return Err(DecryptError::MissingInput("encrypted data is empty"));
    }
    if password.expose_secret().is_empty() {
        return Err(DecryptError::MissingInput("password is empty"));
    }

    let decoded = decode_envelope(base64_data)?;
    debug!(decoded_len = decoded.len(), "decoded envelope");

    let envelope = EncryptedEnvelope::parse(&decoded)?;

    // Derived key — secure buffer from birth
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_envelope_key(password, envelope.salt(), &mut key)?;
    debug!("derived envelope key");

    let plaintext = decrypt_blocks(envelope.ciphertext(), &key, envelope.iv())?;
    debug!(plaintext_len = plaintext.len(), "decrypted ciphertext");

    String::from_utf8(plaintext).map_err(|_| DecryptError::PlaintextNotUtf8)
}
