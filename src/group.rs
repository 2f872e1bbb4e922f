// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Safe-prime group parameters.
//!
//! The group is the order-`q` subgroup of quadratic residues in `Z_p^*`, where
//! `p` is a safe prime and `q = (p - 1) / 2`. A generator is any square other
//! than `0` and `1`: every quadratic residue satisfies `g^q = 1 mod p`, so all
//! exponent arithmetic can be done modulo `q`.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::identities::{One, Zero};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::provider::{is_safe_prime, FixedPrimeProvider, GroupProvider, DEFAULT_BIT_LENGTH};
use crate::random::SecureRandom;

/// Upper bound on generator draws before giving up on a group.
const MAX_GENERATOR_ATTEMPTS: usize = 64;

/// Group parameters `(p, q, g)`.
///
/// - `p`: safe prime (group modulus)
/// - `q`: Sophie Germain prime `(p - 1) / 2` (subgroup order)
/// - `g`: quadratic residue generating the subgroup of order `q`
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParameters {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl GroupParameters {
    /// Builds parameters from an externally supplied safe prime `p` and generator `g`.
    ///
    /// Checks that `p` and `(p - 1) / 2` are prime, `1 < g < p`, and that `g`
    /// lies in the order-`q` subgroup.
    pub fn new(p: BigUint, g: BigUint) -> Result<Arc<Self>> {
        if !is_safe_prime(&p) {
            return Err(Error::InvalidGroupParameters(
                "p is not a safe prime".to_string(),
            ));
        }
        let q = (&p - BigUint::one()) >> 1;
        let params = GroupParameters { p, q, g };
        if params.g <= BigUint::one() || params.g >= params.p {
            return Err(Error::InvalidGroupParameters(
                "g must satisfy 1 < g < p".to_string(),
            ));
        }
        if !params.is_subgroup_element(&params.g) {
            return Err(Error::InvalidGroupParameters(
                "g is not a quadratic residue mod p".to_string(),
            ));
        }
        Ok(Arc::new(params))
    }

    /// Generates a fresh group of `bits` bits.
    ///
    /// The provider's prime is re-verified; a non-safe prime or one of the
    /// wrong width is reported as `Error::GroupGeneration`.
    pub fn generate<P, R>(bits: usize, provider: &P, rng: &mut R) -> Result<Arc<Self>>
    where
        P: GroupProvider + ?Sized,
        R: SecureRandom + ?Sized,
    {
        let p = provider.generate_safe_prime(bits)?;
        if p.bits() != bits {
            warn!(bits, actual_bits = p.bits(), "provider returned a prime of the wrong width");
            return Err(Error::GroupGeneration(format!(
                "provider returned a {}-bit prime, {} requested",
                p.bits(),
                bits
            )));
        }
        if !is_safe_prime(&p) {
            warn!(bits, "provider returned a number that is not a safe prime");
            return Err(Error::GroupGeneration(
                "provider returned a number that is not a safe prime".to_string(),
            ));
        }
        Self::from_verified_prime(p, rng)
    }

    /// The RFC 3526 2048-bit group (ID 14) with a freshly drawn generator.
    pub fn rfc3526<R: SecureRandom + ?Sized>(rng: &mut R) -> Result<Arc<Self>> {
        Self::generate(DEFAULT_BIT_LENGTH, &FixedPrimeProvider::rfc3526(), rng)
    }

    /// `p` must already be known to be a safe prime.
    fn from_verified_prime<R: SecureRandom + ?Sized>(p: BigUint, rng: &mut R) -> Result<Arc<Self>> {
        let q = (&p - BigUint::one()) >> 1;
        let two = BigUint::from(2_u32);
        let upper = &p - BigUint::one();

        for _ in 0..MAX_GENERATOR_ATTEMPTS {
            // g = a^2 mod p for a in [2, p - 1)
            let a = rng
                .random_range(&two, &upper)
                .map_err(|e| match e {
                    Error::EmptyRange => {
                        Error::GroupGeneration("modulus too small for a generator".to_string())
                    }
                    other => other,
                })?;
            let g = a.modpow(&two, &p);
            if g.is_zero() || g.is_one() {
                warn!("degenerate generator drawn, retrying");
                continue;
            }
            debug!(bits = p.bits(), "group parameters ready");
            return Ok(Arc::new(GroupParameters { p, q, g }));
        }
        Err(Error::GroupGeneration(format!(
            "no usable generator after {} attempts",
            MAX_GENERATOR_ATTEMPTS
        )))
    }

    /// Safe prime modulus `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Subgroup order `q = (p - 1) / 2`
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Subgroup generator `g`
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Bit length of `p`.
    pub fn bits(&self) -> usize {
        self.p.bits()
    }

    /// Width in bytes of every encoded group element.
    pub fn byte_len(&self) -> usize {
        Integer::div_ceil(&self.bits(), &8)
    }

    /// `g^e mod p`
    pub fn exp(&self, e: &BigUint) -> BigUint {
        self.g.modpow(e, &self.p)
    }

    /// True iff `0 < v < p` and `v^q = 1 mod p`.
    pub fn is_subgroup_element(&self, v: &BigUint) -> bool {
        !v.is_zero() && *v < self.p && v.modpow(&self.q, &self.p).is_one()
    }

    /// p = 23, q = 11, g = 4. Insecure, tests only.
    #[cfg(test)]
    pub(crate) fn toy() -> Arc<Self> {
        Arc::new(GroupParameters {
            p: BigUint::from(23_u32),
            q: BigUint::from(11_u32),
            g: BigUint::from(4_u32),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{is_prime, NumPrimesProvider};
    use crate::random::tests::DeadRng;

    struct NotSafeProvider;

    impl GroupProvider for NotSafeProvider {
        fn generate_safe_prime(&self, _bits: usize) -> Result<BigUint> {
            // 29 is prime, 14 is not
            Ok(BigUint::from(29_u32))
        }
    }

    /// Ignores the requested width, like an unchecked num-primes call.
    struct ShortProvider;

    impl GroupProvider for ShortProvider {
        fn generate_safe_prime(&self, _bits: usize) -> Result<BigUint> {
            Ok(BigUint::from(23_u32))
        }
    }

    #[test]
    fn test_generate() {
        let mut rng = rand::thread_rng();
        let params = GroupParameters::generate(64, &NumPrimesProvider, &mut rng).unwrap();
        assert!(is_prime(params.p()));
        assert!(is_prime(params.q()));
        assert_eq!(*params.q(), (params.p() - BigUint::one()) >> 1);
        assert!(*params.g() > BigUint::one() && params.g() < params.p());
        assert!(params.g().modpow(params.q(), params.p()).is_one());
    }

    #[test]
    fn test_generate_exact_width() {
        let mut rng = rand::thread_rng();
        for bits in &[32_usize, 40, 64, 96, 128] {
            for _ in 0..4 {
                let params = GroupParameters::generate(*bits, &NumPrimesProvider, &mut rng).unwrap();
                assert_eq!(params.bits(), *bits);
                assert_eq!(params.byte_len(), (*bits + 7) / 8);
            }
        }
    }

    #[test]
    fn test_generate_rejects_wrong_width() {
        let mut rng = rand::thread_rng();
        // 23 is a 5-bit safe prime
        let provider = FixedPrimeProvider::new(BigUint::from(23_u32));
        assert!(GroupParameters::generate(5, &provider, &mut rng).is_ok());
        match GroupParameters::generate(6, &ShortProvider, &mut rng) {
            Err(Error::GroupGeneration(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_rfc3526() {
        let mut rng = rand::thread_rng();
        let params = GroupParameters::rfc3526(&mut rng).unwrap();
        assert_eq!(params.bits(), 2048);
        assert_eq!(params.byte_len(), 256);
        assert!(params.is_subgroup_element(params.g()));
    }

    #[test]
    fn test_generate_rejects_non_safe_prime() {
        let mut rng = rand::thread_rng();
        match GroupParameters::generate(5, &NotSafeProvider, &mut rng) {
            Err(Error::GroupGeneration(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_generate_propagates_provider_failure() {
        let mut rng = rand::thread_rng();
        assert!(GroupParameters::generate(8, &NumPrimesProvider, &mut rng).is_err());
    }

    #[test]
    fn test_generate_without_entropy() {
        let provider = FixedPrimeProvider::new(BigUint::from(23_u32));
        match GroupParameters::generate(5, &provider, &mut DeadRng) {
            Err(Error::RandomnessUnavailable(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_new_validates_relations() {
        let params = GroupParameters::new(BigUint::from(23_u32), BigUint::from(4_u32)).unwrap();
        assert_eq!(*params, *GroupParameters::toy());

        // 5 is a non-residue mod 23
        assert!(GroupParameters::new(BigUint::from(23_u32), BigUint::from(5_u32)).is_err());
        assert!(GroupParameters::new(BigUint::from(23_u32), BigUint::one()).is_err());
        assert!(GroupParameters::new(BigUint::from(23_u32), BigUint::from(23_u32)).is_err());
        // 29 is prime but not safe
        assert!(GroupParameters::new(BigUint::from(29_u32), BigUint::from(4_u32)).is_err());
    }

    #[test]
    fn test_subgroup_membership() {
        let params = GroupParameters::toy();
        // squares mod 23
        for v in &[1_u32, 2, 3, 4, 6, 8, 9, 12, 13, 16, 18] {
            assert!(params.is_subgroup_element(&BigUint::from(*v)));
        }
        for v in &[0_u32, 5, 7, 10, 11, 14, 15, 17, 19, 20, 21, 22, 23] {
            assert!(!params.is_subgroup_element(&BigUint::from(*v)));
        }
    }
}
