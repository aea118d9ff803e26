//! Eavesdropper ("Eve") constructions against HPKS and HPKE.
//!
//! Every probe works from public material only: the public key
//! `(C, B2, A2, r)`, values Eve picks herself, a preshared key that has been
//! made public, and observed ciphertexts. Each one records its intermediate
//! values so a harness can display them, and reports whether any of its
//! final candidates equals a target.
//!
//! Recorded outcomes:
//!
//! | probe                          | recovers target |
//! |--------------------------------|-----------------|
//! | [`forge_without_a2`]           | no              |
//! | [`forge_with_public_pad`]      | yes             |
//! | [`forge_sealed`]               | no              |
//! | [`forge_sealed_reordered`]     | no              |
//! | [`eavesdrop_hpke`]             | no (but `E2` equals the plaintext) |

use crate::bitvec::BitVector;
use crate::error::Result;
use crate::fscx::revolve_passes;
use crate::hpks;
use crate::hske;
use crate::keys::PublicKey;
use crate::types::Split;

/// Outcome of one Eve construction
#[derive(Clone, Debug)]
pub struct Probe {
    /// Short label of the construction
    pub name: &'static str,
    /// Intermediate values in the order Eve computes them
    pub steps: Vec<(&'static str, BitVector)>,
    /// Values Eve offers as her answer
    pub candidates: Vec<BitVector>,
}

impl Probe {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
            candidates: Vec::new(),
        }
    }

    fn record(&mut self, label: &'static str, value: &BitVector) {
        self.steps.push((label, value.clone()));
    }

    /// Intermediate value recorded under `label`
    pub fn step(&self, label: &str) -> Option<&BitVector> {
        self.steps
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value)
    }

    /// True when any candidate equals `target`
    pub fn recovers(&self, target: &BitVector) -> bool {
        self.candidates.iter().any(|candidate| candidate == target)
    }
}

fn revolve_public(public: &PublicKey) -> Result<BitVector> {
    revolve_passes(public.c(), public.b2(), public.public_passes())
}

/// Forgery that leaves `A2` out of the mask: `S = revolve(C, B2, r) ^ nonce`
pub fn forge_without_a2(public: &PublicKey, nonce: &BitVector) -> Result<Probe> {
    let mut probe = Probe::new("HPKS forgery without A2");
    let sig = revolve_public(public)?.xor(nonce)?;
    probe.record("S", &sig);
    let verified = hpks::verify(public, &sig)?;
    probe.record("V", &verified);
    probe.candidates.push(verified);
    Ok(probe)
}

/// Forgery from the public pad: `S2 = (revolve(C, B2, r) ^ A2) ^ nonce`
pub fn forge_with_public_pad(public: &PublicKey, nonce: &BitVector) -> Result<Probe> {
    let mut probe = Probe::new("HPKS forgery with public pad");
    let pad = revolve_public(public)?.xor(public.a2())?;
    probe.record("V", &pad);
    let sig = pad.xor(nonce)?;
    probe.record("S2", &sig);
    let verified = hpks::verify(public, &sig)?;
    probe.record("V2", &verified);
    probe.candidates.push(verified);
    Ok(probe)
}

/// Sealed-signature forgery: encrypt the nonce, mask it with the public pad,
/// then unmask once more before submitting
pub fn forge_sealed(
    public: &PublicKey,
    preshared: &BitVector,
    nonce: &BitVector,
    split: &Split,
) -> Result<Probe> {
    let mut probe = Probe::new("sealed HPKS forgery");
    let ct = hske::encrypt(nonce, preshared, split)?;
    probe.record("E", &ct);
    let pad = revolve_public(public)?.xor(public.a2())?;
    let sig = pad.xor(&ct)?;
    probe.record("S", &sig);
    probe.record("V", &pad);
    let submitted = pad.xor(&sig)?;
    probe.record("S2", &submitted);
    let verified = hpks::verify(public, &submitted)?;
    probe.record("V2", &verified);
    let opened = hske::decrypt(&verified, preshared, split)?;
    probe.record("D", &opened);
    probe.candidates.push(opened);
    Ok(probe)
}

/// Sealed-signature forgery with the steps reordered: mask first, then
/// encrypt the mask, then unmask
pub fn forge_sealed_reordered(
    public: &PublicKey,
    preshared: &BitVector,
    nonce: &BitVector,
    split: &Split,
) -> Result<Probe> {
    let mut probe = Probe::new("sealed HPKS forgery, reordered");
    let pad = revolve_public(public)?.xor(public.a2())?;
    let sig = pad.xor(nonce)?;
    probe.record("S", &sig);
    let ct = hske::encrypt(&sig, preshared, split)?;
    probe.record("E", &ct);
    probe.record("V", &pad);
    let submitted = pad.xor(&ct)?;
    probe.record("S2", &submitted);
    let verified = hpks::verify(public, &submitted)?;
    probe.record("V2", &verified);
    let opened = hske::decrypt(&verified, preshared, split)?;
    probe.record("D", &opened);
    probe.candidates.push(opened);
    Ok(probe)
}

/// Passive attack on an observed HPKE ciphertext
///
/// Candidates are `D = revolve(C, B2, r) ^ A2` and
/// `D2 = revolve(C, B2, r) ^ (D ^ E)`; the intermediate `E2 = D ^ E` is
/// recorded as a step.
pub fn eavesdrop_hpke(public: &PublicKey, observed: &BitVector) -> Result<Probe> {
    let mut probe = Probe::new("HPKE eavesdrop");
    probe.record("E", observed);
    let revolved = revolve_public(public)?;
    let d = revolved.xor(public.a2())?;
    probe.record("D", &d);
    let e2 = d.xor(observed)?;
    probe.record("E2", &e2);
    let d2 = revolved.xor(&e2)?;
    probe.record("D2", &d2);
    probe.candidates.push(d);
    probe.candidates.push(d2);
    Ok(probe)
}
