//! Global constants for the envelope format.
//!
//! The layout is fixed by the producing side: `[salt:16][iv:16][ciphertext]`,
//! PBKDF2-HMAC-SHA256 with 10 000 iterations, AES-256-CBC with PKCS#7 padding.
//! There is no version byte and no parameter negotiation.

/// Salt length in bytes (first envelope region).
pub const SALT_LEN: usize = 16;

/// IV length in bytes (second envelope region).
pub const IV_LEN: usize = 16;

/// AES block length. The ciphertext region must be a positive multiple of this.
pub const AES_BLOCK_LEN: usize = 16;

/// Derived key length (32 bytes = 256-bit AES key).
pub const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count used by the envelope format.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Minimum decodable envelope: salt + IV with an empty ciphertext region.
pub const MIN_ENVELOPE_LEN: usize = SALT_LEN + IV_LEN;
