//! Herradura key exchange (HKEX).
//!
//! Each principal keeps a secret pair `(A, B)`, publishes the commitment
//! `C = revolve(A, B, i)` and, after receiving the peer's commitment,
//! derives `K = revolve(C_peer, B, r) ^ A`. Both sides arrive at the same
//! `K` whenever `i + r` equals the bit length.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::fscx::revolve_passes;
use crate::keys::SecretPair;
use crate::types::Split;

/// Samples a secret pair and computes its commitment
///
/// # Returns
/// Tuple of (secret_pair, commitment)
pub fn generate_exchange<R>(split: &Split, rng: &mut R) -> Result<(SecretPair, BitVector)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pair = SecretPair::random(split.bits(), rng)?;
    let commitment = pair.commit(split)?;
    Ok((pair, commitment))
}

/// Commitment `C = revolve(A, B, i)` to disclose to the peer
pub fn commitment(pair: &SecretPair, split: &Split) -> Result<BitVector> {
    pair.commit(split)
}

/// Shared key from our secret pair and the peer's commitment
///
/// # Arguments
/// * `pair` - Our secret pair `(A, B)`
/// * `peer_commitment` - The commitment disclosed by the peer
/// * `split` - Pass counts `(i, r)`, shared by both principals
///
/// # Returns
/// `revolve(C_peer, B, r) ^ A`
pub fn derive_shared_key(
    pair: &SecretPair,
    peer_commitment: &BitVector,
    split: &Split,
) -> Result<BitVector> {
    pair.a().ensure_same_len(peer_commitment)?;
    split.ensure_bits(pair.bits())?;
    let key = revolve_passes(peer_commitment, pair.b(), split.public())?.xor(pair.a())?;
    debug!(bits = split.bits(), passes = split.public(), "derived shared key");
    Ok(key)
}
