// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Discrete-log signatures over safe-prime groups.
//!
//! ```rust,no_run
//! use dlsig_rs::{generate_group, generate_keypair, sign, verify};
//!
//! let params = generate_group(2048).unwrap();
//! let (pk, sk) = generate_keypair(&params).unwrap();
//! let signature = sign(b"Hello DLSIG.", &sk).unwrap();
//! assert!(verify(b"Hello DLSIG.", &signature, &pk));
//! ```

pub mod error;
pub mod group;
pub mod hash;
pub mod keys;
pub mod provider;
pub mod random;
pub mod signature;
pub mod signer;
pub mod verifier;

use std::sync::Arc;

pub use error::{Error, Result};
pub use group::GroupParameters;
pub use hash::{ChallengeHasher, DigestHasher, Sha256Hasher, Sha512Hasher};
pub use keys::{KeyGenerator, PrivateKey, PublicKey};
pub use provider::{FixedPrimeProvider, GroupProvider, NumPrimesProvider};
pub use random::SecureRandom;
pub use signature::Signature;
pub use signer::Signer;
pub use verifier::Verifier;

/// Generates a group of `bit_length` bits with the in-process safe prime generator.
pub fn generate_group(bit_length: usize) -> Result<Arc<GroupParameters>> {
    let mut rng = random::os_random()?;
    GroupParameters::generate(bit_length, &NumPrimesProvider, &mut rng)
}

/// Draws a key pair from operating system randomness.
pub fn generate_keypair(params: &Arc<GroupParameters>) -> Result<(PublicKey, PrivateKey)> {
    let mut rng = random::os_random()?;
    KeyGenerator::generate(params, &mut rng)
}

/// Signs `message` with SHA-512 challenges and an OS-random nonce.
pub fn sign(message: &[u8], sk: &PrivateKey) -> Result<Signature> {
    let mut rng = random::os_random()?;
    Signer::new(sk).sign(message, &mut rng)
}

/// Verifies a signature produced by [`sign`]. Malformed input yields `false`.
pub fn verify(message: &[u8], signature: &Signature, pk: &PublicKey) -> bool {
    Verifier::new(pk).verify(message, signature)
}
