//! Herradura symmetric key encryption (HSKE).
//!
//! With a key `K` shared in advance (for example from HKEX):
//! `E = revolve(P, K, i)` and `P = revolve(E, K, r)`.

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::fscx::revolve_passes;
use crate::types::Split;

/// Encrypts plaintext `pt` under the shared key
///
/// # Arguments
/// * `pt` - Plaintext, same length as the key
/// * `key` - Preshared key
/// * `split` - Pass counts `(i, r)`
///
/// # Returns
/// Ciphertext `revolve(pt, key, i)`
pub fn encrypt(pt: &BitVector, key: &BitVector, split: &Split) -> Result<BitVector> {
    pt.ensure_same_len(key)?;
    split.ensure_bits(pt.bits())?;
    revolve_passes(pt, key, split.private())
}

/// Decrypts ciphertext `ct` under the shared key: `revolve(ct, key, r)`
pub fn decrypt(ct: &BitVector, key: &BitVector, split: &Split) -> Result<BitVector> {
    ct.ensure_same_len(key)?;
    split.ensure_bits(ct.bits())?;
    revolve_passes(ct, key, split.public())
}
