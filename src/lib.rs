//! # Herradura
//!
//! Herradura is an experimental cryptographic suite built on a single linear
//! bit-mixing function, FSCX (full surroundings cyclic XOR), and its iterated
//! form `revolve`.
//!
//! ## Protocols
//!
//! - **HKEX**: key exchange in the style of Diffie-Hellman
//! - **HSKE**: symmetric encryption with a preshared key
//! - **HPKS**: public key signature, plus a sealed variant over HSKE
//! - **HPKE**: public key encryption
//! - **HAEN**: one-to-one asymmetric encryption from a prior HKEX
//!
//! All vectors in one run share a power-of-two bit length `b >= 8`, split
//! into `i` private passes and `r` public passes with `i + r = b`.
//!
//! The suite makes no claim of standard cryptographic security. The
//! [`probe`] module reproduces what an eavesdropper can and cannot recover
//! from public material.
//!
//! ## Example
//!
//! ```rust
//! use herradura::{derive_shared_key, generate_exchange, Split};
//! use rand::rngs::OsRng;
//!
//! let split = Split::quarter(256).unwrap();
//! let (alice, c_alice) = generate_exchange(&split, &mut OsRng).unwrap();
//! let (bob, c_bob) = generate_exchange(&split, &mut OsRng).unwrap();
//!
//! let k_alice = derive_shared_key(&alice, &c_bob, &split).unwrap();
//! let k_bob = derive_shared_key(&bob, &c_alice, &split).unwrap();
//! assert_eq!(k_alice, k_bob);
//! ```

mod bitvec;
mod error;
mod fscx;
pub mod haen;
mod hkex;
pub mod hpke;
pub mod hpks;
pub mod hske;
mod keys;
pub mod probe;
mod types;

pub use bitvec::BitVector;
pub use error::{HerraduraError, Result};
pub use fscx::{fscx, fscx_by_bits, revolve, surround};
pub use hkex::{commitment, derive_shared_key, generate_exchange};
pub use keys::{generate_keypair, keypair_from_pairs, PrivateKey, PublicKey, SecretPair};
pub use types::{validate_bit_length, SuiteConfig, Split, DEFAULT_BITS, MIN_BITS};
