//! Full Surroundings Cyclic XOR (FSCX) and its iteration.
//!
//! Every output bit of `fscx(a, b)` is the parity of the bit and its two
//! circular neighbours in both inputs:
//!
//! ```text
//! L(x)       = x ^ rotl(x, 1) ^ rotr(x, 1)
//! fscx(a, b) = L(a) ^ L(b)
//! ```
//!
//! `revolve(up, down, n)` feeds the result back as `up` for `n` passes while
//! `down` stays fixed, which unrolls to
//!
//! ```text
//! revolve(up, down, n) = L^n(up) ^ L^n(down) ^ L^(n-1)(down) ^ ... ^ L^1(down)
//! ```
//!
//! For power-of-two bit lengths `L^b` is the identity and `L^1 ^ ... ^ L^b`
//! vanishes. Every protocol in this crate rests on those two facts.

use tracing::trace;

use crate::bitvec::BitVector;
use crate::error::{HerraduraError, Result};

/// Applies the neighbour-parity operator `L` to a single vector
pub fn surround(x: &BitVector) -> Result<BitVector> {
    x.xor(&x.rotate_left(1))?.xor(&x.rotate_right(1))
}

/// One FSCX step over two equal-length vectors
///
/// Accumulates the inputs, their left rotations by one, and a further
/// rotation by minus two of those rotated values.
pub fn fscx(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    let mut result = a.xor(b)?;

    let a1 = a.rotate_left(1);
    let b1 = b.rotate_left(1);
    result = result.xor(&a1.xor(&b1)?)?;

    let a2 = a1.rotate_left(-2);
    let b2 = b1.rotate_left(-2);
    result.xor(&a2.xor(&b2)?)
}

/// FSCX computed bit by bit from circular neighbours
///
/// Produces the same output as [`fscx`]; kept as an independent
/// formulation for cross-checking.
pub fn fscx_by_bits(a: &BitVector, b: &BitVector) -> Result<BitVector> {
    a.ensure_same_len(b)?;
    let bits = a.bits();
    let parity = |x: &BitVector, i: usize| x.bit(i + bits - 1) ^ x.bit(i) ^ x.bit(i + 1);
    BitVector::from_fn(bits, |i| parity(a, i) ^ parity(b, i))
}

/// Iterates FSCX `passes` times, holding `down` fixed
///
/// # Arguments
/// * `up` - Starting value, replaced by each pass's result
/// * `down` - Value mixed in on every pass
/// * `passes` - Number of passes; 0 returns `up` unchanged
///
/// # Returns
/// The final value, `LengthMismatch` for unequal lengths, or
/// `InvalidPassCount` for a negative pass count
pub fn revolve(up: &BitVector, down: &BitVector, passes: isize) -> Result<BitVector> {
    let passes = usize::try_from(passes).map_err(|_| HerraduraError::InvalidPassCount(passes))?;
    revolve_passes(up, down, passes)
}

pub(crate) fn revolve_passes(up: &BitVector, down: &BitVector, passes: usize) -> Result<BitVector> {
    up.ensure_same_len(down)?;
    let mut result = up.clone();
    for step in 1..=passes {
        result = fscx(&result, down)?;
        trace!(step, passes, value = %result, "fscx pass");
    }
    Ok(result)
}
