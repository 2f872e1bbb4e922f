// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use tracing::trace;

use crate::hash::{challenge, ChallengeHasher, Sha512Hasher};
use crate::keys::PublicKey;
use crate::signature::Signature;

/// Checks signatures under one public key.
///
/// Accepts `(r, s)` iff `0 <= r < p`, `0 <= s < q` and
/// `g^s = r * y^c mod p` with `c = H(encode(r) || encode(y) || m) mod p`.
/// Verification never fails with an error: anything malformed is `false`.
pub struct Verifier<'a, H = Sha512Hasher> {
    key: &'a PublicKey,
    hasher: H,
}

impl<'a> Verifier<'a, Sha512Hasher> {
    pub fn new(key: &'a PublicKey) -> Self {
        Verifier {
            key,
            hasher: Sha512Hasher::new(),
        }
    }
}

impl<'a, H: ChallengeHasher> Verifier<'a, H> {
    pub fn with_hasher(key: &'a PublicKey, hasher: H) -> Self {
        Verifier { key, hasher }
    }

    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let params = self.key.params();
        if signature.r >= *params.p() || signature.s >= *params.q() {
            trace!("signature component out of range");
            return false;
        }
        let c = match challenge(&self.hasher, params, &signature.r, self.key.y(), message) {
            Some(c) => c,
            None => return false,
        };

        // g^s == r * y^c mod p
        let lhs = params.exp(&signature.s);
        let rhs = (&signature.r * self.key.y().modpow(&c, params.p())) % params.p();
        let valid = lhs == rhs;
        if !valid {
            trace!("signature equation does not hold");
        }
        valid
    }
}
