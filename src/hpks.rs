//! Herradura public key signature (HPKS).
//!
//! The signer masks the message with the private keystream,
//! `S = revolve(C2, B, r) ^ A ^ P`; a verifier removes it with the public
//! one, `V = revolve(C, B2, r) ^ A2 ^ S`, and accepts when `V == P`.
//!
//! The sealed variant signs the HSKE encryption of the message under a key
//! that may be public, and verification ends with the matching HSKE
//! decryption.

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::hske;
use crate::keys::{PrivateKey, PublicKey};
use crate::types::Split;

/// Signs `msg` with the private key
///
/// # Returns
/// Signature `revolve(C2, B, r) ^ A ^ msg`
pub fn sign(private: &PrivateKey, msg: &BitVector) -> Result<BitVector> {
    private.a().ensure_same_len(msg)?;
    private.pad()?.xor(msg)
}

/// Recovers the signed value `revolve(C, B2, r) ^ A2 ^ sig`
pub fn verify(public: &PublicKey, sig: &BitVector) -> Result<BitVector> {
    public.c().ensure_same_len(sig)?;
    public.pad()?.xor(sig)
}

/// Checks `sig` against an expected message in constant time
pub fn verify_message(public: &PublicKey, sig: &BitVector, msg: &BitVector) -> Result<bool> {
    verify(public, sig)?.equals(msg)
}

/// Signs the HSKE encryption of `msg` under `preshared`
pub fn seal(
    private: &PrivateKey,
    preshared: &BitVector,
    msg: &BitVector,
    split: &Split,
) -> Result<BitVector> {
    let ct = hske::encrypt(msg, preshared, split)?;
    sign(private, &ct)
}

/// Verifies a sealed signature and decrypts the recovered ciphertext
pub fn open(
    public: &PublicKey,
    preshared: &BitVector,
    sig: &BitVector,
    split: &Split,
) -> Result<BitVector> {
    let ct = verify(public, sig)?;
    hske::decrypt(&ct, preshared, split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HerraduraError;
    use crate::keys::generate_keypair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sign_verify() {
        let mut rng = StdRng::seed_from_u64(21);
        for bits in [8, 16, 64, 256] {
            let split = Split::quarter(bits).unwrap();
            let (public, private) = generate_keypair(&split, &mut rng).unwrap();
            let msg = BitVector::random(bits, &mut rng).unwrap();

            let sig = sign(&private, &msg).unwrap();

            assert_eq!(verify(&public, &sig).unwrap(), msg);
            assert!(verify_message(&public, &sig, &msg).unwrap());
        }
    }

    #[test]
    fn test_verify_rejects_other_message() {
        let mut rng = StdRng::seed_from_u64(22);
        let split = Split::quarter(64).unwrap();
        let (public, private) = generate_keypair(&split, &mut rng).unwrap();
        let msg = BitVector::random(64, &mut rng).unwrap();
        let other = BitVector::random(64, &mut rng).unwrap();

        let sig = sign(&private, &msg).unwrap();
        assert!(!verify_message(&public, &sig, &other).unwrap());
    }

    #[test]
    fn test_verify_with_other_key_fails() {
        let mut rng = StdRng::seed_from_u64(23);
        let split = Split::quarter(64).unwrap();
        let (_, private) = generate_keypair(&split, &mut rng).unwrap();
        let (other_public, _) = generate_keypair(&split, &mut rng).unwrap();
        let msg = BitVector::random(64, &mut rng).unwrap();

        let sig = sign(&private, &msg).unwrap();
        assert!(!verify_message(&other_public, &sig, &msg).unwrap());
    }

    #[test]
    fn test_seal_open() {
        let mut rng = StdRng::seed_from_u64(24);
        let split = Split::quarter(256).unwrap();
        let (public, private) = generate_keypair(&split, &mut rng).unwrap();
        let preshared = BitVector::random(256, &mut rng).unwrap();
        let msg = BitVector::random(256, &mut rng).unwrap();

        let sig = seal(&private, &preshared, &msg, &split).unwrap();
        assert_eq!(open(&public, &preshared, &sig, &split).unwrap(), msg);
    }

    #[test]
    fn test_message_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(25);
        let split = Split::quarter(64).unwrap();
        let (public, private) = generate_keypair(&split, &mut rng).unwrap();
        let short = BitVector::zero(32).unwrap();
        assert!(matches!(
            sign(&private, &short),
            Err(HerraduraError::LengthMismatch { .. })
        ));
        assert!(verify(&public, &short).is_err());
    }
}
