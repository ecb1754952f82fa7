// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encoding;
pub mod envelope;
pub mod error;

// High-level API — this is what 99% of users import
pub use decryptor::decrypt;
pub use error::DecryptError;

// Low-level KDF — public at the root because callers that only need the key
// (e.g. to feed a different cipher layer) should not have to go through the
// full envelope pipeline.
pub use crypto::kdf::derive_envelope_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::decrypt_batch;
