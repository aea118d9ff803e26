//! Fixed-length bit vectors.
//!
//! A [`BitVector`] holds exactly `bits` bits (a power of two, at least 8) as
//! big-endian bytes. Bit index 0 is the least significant bit of the last
//! byte, so the hex rendering matches the integer reading of the vector.
//! Values are immutable: every operation returns a new vector.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{HerraduraError, Result};
use crate::types::validate_bit_length;

/// An immutable, fixed-length sequence of bits
///
/// The bytes are wiped on drop. There is no public way to clear a vector in
/// place, so every live vector keeps its validated length.
#[derive(Clone)]
pub struct BitVector {
    bits: usize,
    bytes: Vec<u8>,
}

impl BitVector {
    /// All-zero vector of `bits` bits
    pub fn zero(bits: usize) -> Result<Self> {
        validate_bit_length(bits)?;
        Ok(Self {
            bits,
            bytes: vec![0u8; bits / 8],
        })
    }

    /// Builds a vector from big-endian bytes; the bit length is `8 * bytes.len()`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bits = bytes.len() * 8;
        validate_bit_length(bits)?;
        Ok(Self {
            bits,
            bytes: bytes.to_vec(),
        })
    }

    /// Fills a new vector from the supplied random source
    ///
    /// # Arguments
    /// * `bits` - Bit length, a power of two >= 8
    /// * `rng` - Cryptographically secure random source
    ///
    /// # Returns
    /// The random vector, or `Entropy` if the source fails
    pub fn random<R>(bits: usize, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        validate_bit_length(bits)?;
        let mut bytes = vec![0u8; bits / 8];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| HerraduraError::Entropy(e.to_string()))?;
        Ok(Self { bits, bytes })
    }

    /// Random vector drawn from the operating system's RNG
    pub fn generate(bits: usize) -> Result<Self> {
        Self::random(bits, &mut OsRng)
    }

    /// Length in bits
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Big-endian backing bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bit at `index`, where index 0 is the least significant bit.
    /// `index` is taken modulo the bit length.
    pub fn bit(&self, index: usize) -> bool {
        let index = index % self.bits;
        let byte = self.bytes[self.bytes.len() - 1 - index / 8];
        (byte >> (index % 8)) & 1 == 1
    }

    /// Builds a vector bit by bit from `f(index)`
    pub(crate) fn from_fn(bits: usize, f: impl Fn(usize) -> bool) -> Result<Self> {
        let mut out = Self::zero(bits)?;
        let len = out.bytes.len();
        for index in 0..bits {
            if f(index) {
                out.bytes[len - 1 - index / 8] |= 1 << (index % 8);
            }
        }
        Ok(out)
    }

    /// Fails with `LengthMismatch` unless both vectors have the same length
    pub fn ensure_same_len(&self, other: &Self) -> Result<()> {
        if self.bits != other.bits {
            return Err(HerraduraError::mismatch(self.bits, other.bits));
        }
        Ok(())
    }

    /// Bitwise XOR of two equal-length vectors
    pub fn xor(&self, other: &Self) -> Result<Self> {
        self.ensure_same_len(other)?;
        let bytes = self
            .bytes
            .iter()
            .zip(other.bytes.iter())
            .map(|(x, y)| x ^ y)
            .collect();
        Ok(Self {
            bits: self.bits,
            bytes,
        })
    }

    /// Circular left rotation by `k` positions (towards the most significant
    /// bit). Negative `k` rotates right.
    pub fn rotate_left(&self, k: isize) -> Self {
        let k = k.rem_euclid(self.bits as isize) as usize;
        if k == 0 {
            return self.clone();
        }

        let mut bytes = self.bytes.clone();
        bytes.rotate_left(k / 8);

        let shift = k % 8;
        if shift != 0 {
            let first = bytes[0];
            let len = bytes.len();
            for i in 0..len {
                let next = if i + 1 < len { bytes[i + 1] } else { first };
                bytes[i] = (bytes[i] << shift) | (next >> (8 - shift));
            }
        }

        Self {
            bits: self.bits,
            bytes,
        }
    }

    /// Circular right rotation by `k` positions. Negative `k` rotates left.
    pub fn rotate_right(&self, k: isize) -> Self {
        // isize::MIN wraps to itself, which is still 0 modulo any power of two
        self.rotate_left(k.wrapping_neg())
    }

    /// Constant-time equality that rejects vectors of different length
    pub fn equals(&self, other: &Self) -> Result<bool> {
        self.ensure_same_len(other)?;
        Ok(bool::from(self.bytes.ct_eq(&other.bytes)))
    }

    /// True when every bit is zero
    pub fn is_zero(&self) -> bool {
        let acc = self.bytes.iter().fold(0u8, |acc, b| acc | b);
        bool::from(acc.ct_eq(&0))
    }

    /// Lowercase hex of the big-endian bytes
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl Drop for BitVector {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for BitVector {}

// Constant-time; vectors of different length compare unequal.
impl PartialEq for BitVector {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && bool::from(self.bytes.ct_eq(&other.bytes))
    }
}

impl Eq for BitVector {}

// Vectors carry keys and plaintexts; hex is only available through Display.
impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector<{}>", self.bits)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
