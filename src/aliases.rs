//! # Secure-Gate Type Aliases
//!
//! Type aliases for secure memory management using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All secret-bearing buffers require an explicit `.expose_secret()` /
//! `.expose_secret_mut()` to access the underlying data and are zeroized on
//! drop.
//!
//! The salt and IV of an envelope are public values, but they travel next to
//! the password and derived key, so they follow the same access discipline.

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// HMAC primitives
// ─────────────────────────────────────────────────────────────────────────────
use hmac::Hmac;
use sha2::Sha256;

/// PRF used by the envelope KDF (PBKDF2-HMAC-SHA256).
pub type HmacSha256 = Hmac<Sha256>;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size concrete secrets — alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // derived envelope key
fixed_alias!(pub Iv16, 16); // CBC initialization vector
fixed_alias!(pub Salt16, 16); // PBKDF2 salt
