//! Herradura asymmetric one-to-one encryption (HAEN).
//!
//! Both variants reuse the material of a completed HKEX between Alice
//! `(A, B)` and Bob `(A2, B2)` with shared value `PSV`.
//!
//! - HAEN1, keys of equal size: Alice encrypts with `(PSV, A, B, i)`,
//!   Bob decrypts with `(A2, B2, r)`.
//! - HAEN2, keys of different size: Bob ran the exchange on his own and
//!   handed Alice `(PSV, B)`; he decrypts with `(A, A2, B2, r)`.

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::fscx::revolve_passes;
use crate::keys::SecretPair;
use crate::types::Split;

/// HAEN1 encryption: `revolve(pt ^ psv ^ A, B, i)`
///
/// # Arguments
/// * `pt` - Plaintext
/// * `psv` - Shared value from the prior key exchange
/// * `sender` - The sender's exchange pair `(A, B)`
/// * `split` - Pass counts `(i, r)`
pub fn encrypt_paired(
    pt: &BitVector,
    psv: &BitVector,
    sender: &SecretPair,
    split: &Split,
) -> Result<BitVector> {
    split.ensure_bits(pt.bits())?;
    let masked = pt.xor(psv)?.xor(sender.a())?;
    revolve_passes(&masked, sender.b(), split.private())
}

/// HAEN1 decryption: `revolve(ct, B2, r) ^ A2`
pub fn decrypt_paired(ct: &BitVector, recipient: &SecretPair, split: &Split) -> Result<BitVector> {
    split.ensure_bits(ct.bits())?;
    revolve_passes(ct, recipient.b(), split.public())?.xor(recipient.a())
}

/// HAEN2 encryption with the reduced key `(psv, B)`: `revolve(pt ^ psv, B, i)`
pub fn encrypt_delegated(
    pt: &BitVector,
    psv: &BitVector,
    b: &BitVector,
    split: &Split,
) -> Result<BitVector> {
    split.ensure_bits(pt.bits())?;
    revolve_passes(&pt.xor(psv)?, b, split.private())
}

/// HAEN2 decryption with `(A, A2, B2)`: `revolve(ct, B2, r) ^ A ^ A2`
///
/// # Arguments
/// * `ct` - Ciphertext
/// * `a` - First secret of the pair whose `B` was handed to the sender
/// * `recipient` - The other exchange pair `(A2, B2)`
/// * `split` - Pass counts `(i, r)`
pub fn decrypt_delegated(
    ct: &BitVector,
    a: &BitVector,
    recipient: &SecretPair,
    split: &Split,
) -> Result<BitVector> {
    split.ensure_bits(ct.bits())?;
    revolve_passes(ct, recipient.b(), split.public())?
        .xor(a)?
        .xor(recipient.a())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hkex::{derive_shared_key, generate_exchange};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_paired_roundtrip() {
        let mut rng = StdRng::seed_from_u64(41);
        for bits in [8, 16, 64, 256] {
            let split = Split::quarter(bits).unwrap();
            let (alice, _) = generate_exchange(&split, &mut rng).unwrap();
            let (bob, c_bob) = generate_exchange(&split, &mut rng).unwrap();
            let psv = derive_shared_key(&alice, &c_bob, &split).unwrap();
            let pt = BitVector::random(bits, &mut rng).unwrap();

            let ct = encrypt_paired(&pt, &psv, &alice, &split).unwrap();
            assert_eq!(decrypt_paired(&ct, &bob, &split).unwrap(), pt);
        }
    }

    #[test]
    fn test_delegated_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        for bits in [8, 32, 128] {
            let split = Split::quarter(bits).unwrap();
            // Bob runs both sides of the exchange.
            let (first, c_first) = generate_exchange(&split, &mut rng).unwrap();
            let (second, _) = generate_exchange(&split, &mut rng).unwrap();
            let psv = derive_shared_key(&second, &c_first, &split).unwrap();
            let pt = BitVector::random(bits, &mut rng).unwrap();

            let ct = encrypt_delegated(&pt, &psv, first.b(), &split).unwrap();
            assert_eq!(
                decrypt_delegated(&ct, first.a(), &second, &split).unwrap(),
                pt
            );
        }
    }

    #[test]
    fn test_paired_requires_matching_exchange() {
        let mut rng = StdRng::seed_from_u64(43);
        let split = Split::quarter(64).unwrap();
        let (alice, _) = generate_exchange(&split, &mut rng).unwrap();
        let (bob, c_bob) = generate_exchange(&split, &mut rng).unwrap();
        let (stranger, _) = generate_exchange(&split, &mut rng).unwrap();
        let psv = derive_shared_key(&alice, &c_bob, &split).unwrap();
        let pt = BitVector::random(64, &mut rng).unwrap();

        let ct = encrypt_paired(&pt, &psv, &alice, &split).unwrap();
        assert_ne!(decrypt_paired(&ct, &stranger, &split).unwrap(), pt);
        assert_eq!(decrypt_paired(&ct, &bob, &split).unwrap(), pt);
    }
}
