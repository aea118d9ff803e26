//! Secret pairs and the public/private key tuples used by HPKS and HPKE.

use std::fmt;

use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::ZeroizeOnDrop;

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::fscx::revolve_passes;
use crate::types::Split;

/// A principal's secret pair `(A, B)`. Never disclosed.
///
/// Both halves are wiped when the pair is dropped.
#[derive(Clone)]
pub struct SecretPair {
    a: BitVector,
    b: BitVector,
}

impl SecretPair {
    /// Builds a pair from two vectors of the same length
    pub fn new(a: BitVector, b: BitVector) -> Result<Self> {
        a.ensure_same_len(&b)?;
        Ok(Self { a, b })
    }

    /// Samples a fresh pair from `rng`
    pub fn random<R>(bits: usize, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let a = BitVector::random(bits, rng)?;
        let b = BitVector::random(bits, rng)?;
        Ok(Self { a, b })
    }

    /// Samples a fresh pair from the OS RNG
    pub fn generate(bits: usize) -> Result<Self> {
        Self::random(bits, &mut rand::rngs::OsRng)
    }

    /// First secret (A)
    pub fn a(&self) -> &BitVector {
        &self.a
    }

    /// Second secret (B)
    pub fn b(&self) -> &BitVector {
        &self.b
    }

    /// Bit length of both secrets
    pub fn bits(&self) -> usize {
        self.a.bits()
    }

    /// The disclosable commitment `C = revolve(A, B, i)`
    pub fn commit(&self, split: &Split) -> Result<BitVector> {
        split.ensure_bits(self.bits())?;
        let c = revolve_passes(&self.a, &self.b, split.private())?;
        debug!(bits = self.bits(), passes = split.private(), "computed commitment");
        Ok(c)
    }
}

impl ZeroizeOnDrop for SecretPair {}

impl fmt::Debug for SecretPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretPair<{}>([REDACTED])", self.bits())
    }
}

/// Public key `(C, B2, A2, r)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    c: BitVector,
    b2: BitVector,
    a2: BitVector,
    public_passes: usize,
}

/// Checks that every component has the split's length
fn ensure_components(split: &Split, parts: [&BitVector; 3]) -> Result<()> {
    for part in parts {
        split.ensure_bits(part.bits())?;
    }
    Ok(())
}

impl PublicKey {
    /// Assembles a public key; `r` is taken from `split`
    pub fn new(c: BitVector, b2: BitVector, a2: BitVector, split: &Split) -> Result<Self> {
        ensure_components(split, [&c, &b2, &a2])?;
        Ok(Self {
            c,
            b2,
            a2,
            public_passes: split.public(),
        })
    }

    /// Commitment of the primary pair, `revolve(A, B, i)`
    pub fn c(&self) -> &BitVector {
        &self.c
    }

    /// Second secret of the secondary pair
    pub fn b2(&self) -> &BitVector {
        &self.b2
    }

    /// First secret of the secondary pair
    pub fn a2(&self) -> &BitVector {
        &self.a2
    }

    /// Public-phase pass count
    pub fn public_passes(&self) -> usize {
        self.public_passes
    }

    /// Bit length of the key material
    pub fn bits(&self) -> usize {
        self.c.bits()
    }

    /// The keystream `revolve(C, B2, r) ^ A2`, computable by anyone
    pub fn pad(&self) -> Result<BitVector> {
        revolve_passes(&self.c, &self.b2, self.public_passes)?.xor(&self.a2)
    }
}

/// Private key `(C2, B, A, r)`
#[derive(Clone)]
pub struct PrivateKey {
    c2: BitVector,
    b: BitVector,
    a: BitVector,
    public_passes: usize,
}

impl PrivateKey {
    /// Assembles a private key; `r` is taken from `split`
    pub fn new(c2: BitVector, b: BitVector, a: BitVector, split: &Split) -> Result<Self> {
        ensure_components(split, [&c2, &b, &a])?;
        Ok(Self {
            c2,
            b,
            a,
            public_passes: split.public(),
        })
    }

    /// Commitment of the secondary pair, `revolve(A2, B2, i)`
    pub fn c2(&self) -> &BitVector {
        &self.c2
    }

    /// Second secret of the primary pair
    pub fn b(&self) -> &BitVector {
        &self.b
    }

    /// First secret of the primary pair
    pub fn a(&self) -> &BitVector {
        &self.a
    }

    /// Public-phase pass count
    pub fn public_passes(&self) -> usize {
        self.public_passes
    }

    /// Bit length of the key material
    pub fn bits(&self) -> usize {
        self.a.bits()
    }

    /// The private keystream `revolve(C2, B, r) ^ A`, equal to the public pad
    pub fn pad(&self) -> Result<BitVector> {
        revolve_passes(&self.c2, &self.b, self.public_passes)?.xor(&self.a)
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrivateKey<{}>([REDACTED], r={})",
            self.bits(),
            self.public_passes
        )
    }
}

/// Derives a key pair from two secret pairs held by the same principal
///
/// # Arguments
/// * `primary` - `(A, B)`, whose commitment is published
/// * `secondary` - `(A2, B2)`, whose secrets are published
/// * `split` - Pass counts `(i, r)`
///
/// # Returns
/// Tuple of (public_key, private_key)
pub fn keypair_from_pairs(
    primary: &SecretPair,
    secondary: &SecretPair,
    split: &Split,
) -> Result<(PublicKey, PrivateKey)> {
    primary.a.ensure_same_len(&secondary.a)?;
    let c = primary.commit(split)?;
    let c2 = secondary.commit(split)?;

    let public = PublicKey::new(c, secondary.b.clone(), secondary.a.clone(), split)?;
    let private = PrivateKey::new(c2, primary.b.clone(), primary.a.clone(), split)?;
    Ok((public, private))
}

/// Generates a fresh HPKS/HPKE key pair from `rng`
pub fn generate_keypair<R>(split: &Split, rng: &mut R) -> Result<(PublicKey, PrivateKey)>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let primary = SecretPair::random(split.bits(), rng)?;
    let secondary = SecretPair::random(split.bits(), rng)?;
    let keys = keypair_from_pairs(&primary, &secondary, split)?;
    debug!(bits = split.bits(), "generated key pair");
    Ok(keys)
}
