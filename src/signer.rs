// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Signing.
//!
//! For a private key `x` and a fresh nonce `t` drawn uniformly from `[1, q)`:
//!
//! - `r = g^t mod p`
//! - `c = H(encode(r) || encode(y) || m) mod p`
//! - `s = (t + c*x) mod q`
//!
//! The nonce is never derived from the message and never reused. Two
//! signatures sharing a nonce over different messages reveal `x`.

use num_bigint::BigUint;
use num_traits::identities::One;
use tracing::trace;

use crate::error::{Error, Result};
use crate::group::GroupParameters;
use crate::hash::{challenge, ChallengeHasher, Sha512Hasher};
use crate::keys::PrivateKey;
use crate::random::SecureRandom;
use crate::signature::Signature;

/// Signs messages under one private key.
pub struct Signer<'a, H = Sha512Hasher> {
    key: &'a PrivateKey,
    hasher: H,
}

impl<'a> Signer<'a, Sha512Hasher> {
    /// Signer using the default SHA-512 challenge hash.
    pub fn new(key: &'a PrivateKey) -> Self {
        Signer {
            key,
            hasher: Sha512Hasher::new(),
        }
    }
}

impl<'a, H: ChallengeHasher> Signer<'a, H> {
    pub fn with_hasher(key: &'a PrivateKey, hasher: H) -> Self {
        Signer { key, hasher }
    }

    /// Signs `message` with a nonce freshly drawn from `rng`.
    pub fn sign<R: SecureRandom + ?Sized>(&self, message: &[u8], rng: &mut R) -> Result<Signature> {
        let x = self.key.exponent()?;
        let params = self.key.params();
        let t = rng.random_range(&BigUint::one(), params.q())?;
        let signature = self.sign_with_nonce(message, &x, t)?;
        trace!(message_len = message.len(), "message signed");
        Ok(signature)
    }

    /// Consumes the nonce so it cannot outlive the signature computation.
    fn sign_with_nonce(&self, message: &[u8], x: &BigUint, t: BigUint) -> Result<Signature> {
        let params = self.key.params();
        let r = params.exp(&t);
        let c = challenge(&self.hasher, params, &r, self.key.public_key().y(), message)
            .ok_or_else(|| {
                Error::InvalidPrivateKey("public value exceeds the group encoding".to_string())
            })?;
        let s = response(params, t, &c, x);
        Ok(Signature { r, s })
    }
}

/// `s = (t + c*x) mod q`
fn response(params: &GroupParameters, t: BigUint, c: &BigUint, x: &BigUint) -> BigUint {
    (t + c * x) % params.q()
}
