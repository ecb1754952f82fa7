//! Parallel batch decryption (feature `batch-ops`).
//!
//! Envelopes are fully independent: each call owns its own envelope, password
//! and derived key, with no shared cache, so the items run in parallel with
//! no coordination.

use rayon::prelude::*;

use crate::aliases::PasswordString;
use crate::{decrypt, DecryptError};

/// Decrypt many `(envelope, password)` pairs in parallel.
///
/// Results come back per item, in input order: a wrong password on one item
/// does not abort its neighbours.
pub fn decrypt_batch(
    batch: &[(String, PasswordString)],
) -> Vec<Result<String, DecryptError>> {
    batch
        .par_iter()
        .map(|(base64_data, password)| decrypt(base64_data, password))
        .collect()
}
