//! tests/common.rs
//! Shared constants and the reference envelope encryptor used by the
//! round-trip tests.
//!
//! The production crate has no encryption path, so the producing side of the
//! format is rebuilt here as test scaffolding: random 16-byte salt and IV per
//! call, PBKDF2-HMAC-SHA256 with 10 000 iterations, AES-256-CBC with PKCS#7
//! padding, standard base64 output.

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use secure_gate::RevealSecret;

use envcrypt_rs::aliases::{Aes256Key32, PasswordString, Salt16};
use envcrypt_rs::derive_envelope_key;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Encrypt `plaintext` into a base64 `[salt:16][iv:16][ciphertext]` envelope.
///
/// Salt and IV are freshly random per call; decryption must not depend on
/// their specific values.
#[allow(dead_code)] // Used across multiple test files
pub fn encrypt_envelope(plaintext: &[u8], password: &str) -> String {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut salt_bytes);
    let mut iv_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut iv_bytes);

    let password = PasswordString::new(password.to_string());
    let salt = Salt16::from(salt_bytes);
    let mut key = Aes256Key32::new([0u8; 32]);
    derive_envelope_key(&password, &salt, &mut key).expect("reference KDF");

    let cipher = Aes256CbcEnc::new(key.expose_secret().into(), (&iv_bytes).into());
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut envelope = Vec::with_capacity(32 + ciphertext.len());
    envelope.extend_from_slice(&salt_bytes);
    envelope.extend_from_slice(&iv_bytes);
    envelope.extend_from_slice(&ciphertext);
    STANDARD.encode(envelope)
}
