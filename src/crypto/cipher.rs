//! src/crypto/cipher.rs
//!
//! AES-256-CBC block decryption with PKCS#7 unpadding.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use secure_gate::RevealSecret;

use crate::aliases::{Aes256Key32, Iv16};
use crate::consts::AES_BLOCK_LEN;
use crate::error::DecryptError;

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypt `ciphertext` with AES-256-CBC and strip the PKCS#7 padding.
///
/// Key and IV lengths are fixed by their types; the remaining preconditions
/// are checked here: the ciphertext must be non-empty and a whole number of
/// 16-byte blocks. Violations are layout errors, not cryptographic failures.
///
/// Either the full plaintext is returned or no bytes are returned.
///
/// # Errors
///
/// - [`DecryptError::InvalidCiphertextLayout`] for an empty or misaligned
///   ciphertext region.
/// - [`DecryptError::DecryptionFailed`] when the padding after decryption is
///   malformed, i.e. the key/IV do not match the data. With this format that
///   almost always means a wrong password.
pub fn decrypt_blocks(
    ciphertext: &[u8],
    key: &Aes256Key32,
    iv: &Iv16,
) -> Result<Vec<u8>, DecryptError> {
    if ciphertext.is_empty() {
        return Err(DecryptError::InvalidCiphertextLayout(
            "ciphertext is empty".into(),
        ));
    }
    if ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(DecryptError::InvalidCiphertextLayout(format!(
            "ciphertext length {} is not a multiple of {AES_BLOCK_LEN}",
            ciphertext.len()
        )));
    }

    let cipher = Aes256CbcDec::new(key.expose_secret().into(), iv.expose_secret().into());

    let mut buffer = ciphertext.to_vec();
    let plaintext = cipher
        .decrypt_padded_mut::<Pkcs7>(&mut buffer)
        .map_err(|_| DecryptError::DecryptionFailed)?;

    Ok(plaintext.to_vec())
}
