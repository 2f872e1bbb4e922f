// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Challenge hashing and the fixed integer encoding shared by signer and verifier.
//!
//! # Encoding
//!
//! Integers are unsigned big-endian, left-padded with zeros to
//! `k = ceil(bits(p) / 8)` bytes. The challenge input is
//! `encode_k(r) || encode_k(y) || message`, so no two `(r, y)` pairs can
//! produce the same hash input prefix.

use num_bigint::BigUint;
use sha2::{Digest, Sha256, Sha512};
use std::marker::PhantomData;

use crate::group::GroupParameters;

/// Collision resistant hash used to derive the challenge.
pub trait ChallengeHasher {
    /// Hash the concatenation of `parts`.
    fn hash(&self, parts: &[&[u8]]) -> Vec<u8>;
}

/// [`ChallengeHasher`] over any `sha2`-style [`Digest`].
pub struct DigestHasher<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> DigestHasher<D> {
    pub fn new() -> Self {
        DigestHasher {
            _digest: PhantomData,
        }
    }
}

impl<D> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<D> Copy for DigestHasher<D> {}

impl<D> std::fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DigestHasher")
    }
}

impl<D: Digest> ChallengeHasher for DigestHasher<D> {
    fn hash(&self, parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = D::new();
        for part in parts {
            hasher.update(*part);
        }
        hasher.finalize().to_vec()
    }
}

/// Default challenge hash.
pub type Sha512Hasher = DigestHasher<Sha512>;

pub type Sha256Hasher = DigestHasher<Sha256>;

/// Big-endian encoding of `value` left-padded to exactly `width` bytes.
///
/// Returns `None` if `value` does not fit.
pub fn encode_fixed(value: &BigUint, width: usize) -> Option<Vec<u8>> {
    let raw = value.to_bytes_be();
    // to_bytes_be gives [0] for zero
    let raw: &[u8] = if raw == [0] { &[] } else { &raw };
    if raw.len() > width {
        return None;
    }
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(raw);
    Some(out)
}

/// `c = H(encode(r) || encode(y) || message) mod p`
///
/// Returns `None` if `r` or `y` is too wide for the group encoding, which only
/// happens for values outside `[0, p)`.
pub fn challenge<H: ChallengeHasher + ?Sized>(
    hasher: &H,
    params: &GroupParameters,
    r: &BigUint,
    y: &BigUint,
    message: &[u8],
) -> Option<BigUint> {
    let width = params.byte_len();
    let r_bytes = encode_fixed(r, width)?;
    let y_bytes = encode_fixed(y, width)?;
    let digest = hasher.hash(&[r_bytes.as_slice(), y_bytes.as_slice(), message]);
    Some(BigUint::from_bytes_be(&digest) % params.p())
}
