// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(base64_data, &password)?` returning the UTF-8 plaintext.

pub(crate) mod decrypt;

pub use decrypt::decrypt;
