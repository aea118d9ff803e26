//! Herradura public key encryption (HPKE).
//!
//! Anyone holding the public key encrypts with
//! `E = revolve(C, B2, r) ^ A2 ^ P`; the key owner decrypts with
//! `P = revolve(C2, B, r) ^ A ^ E`.

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};

/// Encrypts `pt` to the owner of `public`
pub fn encrypt(public: &PublicKey, pt: &BitVector) -> Result<BitVector> {
    public.c().ensure_same_len(pt)?;
    public.pad()?.xor(pt)
}

/// Decrypts `ct` with the private key
pub fn decrypt(private: &PrivateKey, ct: &BitVector) -> Result<BitVector> {
    private.a().ensure_same_len(ct)?;
    private.pad()?.xor(ct)
}
