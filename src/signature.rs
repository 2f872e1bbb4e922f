// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use num_bigint::BigUint;

use crate::group::GroupParameters;
use crate::hash::encode_fixed;

/// Signature `(r, s)` with `r = g^t mod p` and `s = (t + c*x) mod q`.
///
/// Wire form is `encode_k(r) || encode_k(s)` where `k = params.byte_len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub r: BigUint,
    pub s: BigUint,
}

impl Signature {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Fixed-width encoding, `None` if either component is wider than `p`.
    pub fn to_bytes(&self, params: &GroupParameters) -> Option<Vec<u8>> {
        let width = params.byte_len();
        let mut out = encode_fixed(&self.r, width)?;
        out.extend(encode_fixed(&self.s, width)?);
        Some(out)
    }

    /// Splits `bytes` into `r` and `s`. Only the length is checked here; range
    /// checks are the verifier's job.
    pub fn from_bytes(params: &GroupParameters, bytes: &[u8]) -> Option<Self> {
        let width = params.byte_len();
        if bytes.len() != 2 * width {
            return None;
        }
        let (r, s) = bytes.split_at(width);
        Some(Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }
}
