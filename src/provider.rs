// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Safe prime providers.
//!
//! A [`GroupProvider`] hands out a safe prime `p` (both `p` and `(p-1)/2` prime)
//! of a requested bit length. Group construction re-verifies whatever a provider
//! returns, so a faulty provider surfaces as `Error::GroupGeneration` rather than
//! a weak group.

use num_bigint::BigUint;
use num_integer::Integer;
use num_primes::{Generator, Verification};
use num_traits::identities::One;
use num_traits::ToPrimitive;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Smallest bit length accepted for generated groups.
pub const MIN_BIT_LENGTH: usize = 32;

/// Generation rounds before `NumPrimesProvider` gives up on hitting the exact width.
const MAX_PRIME_ATTEMPTS: usize = 64;

/// Below this bound primality is decided by trial division. `num-primes`
/// reports every prime under 17891 as composite.
const TRIAL_DIVISION_LIMIT: u64 = 1 << 32;

/// Bit length used by the crate-level `generate_group` default and RFC 3526 group 14.
pub const DEFAULT_BIT_LENGTH: usize = 2048;

/// 2048-bit MODP Group from RFC 3526 (Group ID 14)
///
/// The prime is: 2^2048 - 2^1984 - 1 + 2^64 * { [2^1918 pi] + 124476 }
const RFC3526_2048_HEX: &[u8] = b"ffffffffffffffffc90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74\
020bbea63b139b22514a08798e3404ddef9519b3cd3a431b302b0a6df25f14374fe1\
356d6d51c245e485b576625e7ec6f44c42e9a637ed6b0bff5cb6f406b7edee386bfb\
5a899fa5ae9f24117c4b1fe649286651ece45b3dc2007cb8a163bf0598da48361c55d\
39a69163fa8fd24cf5f83655d23dca3ad961c62f356208552bb9ed529077096966d67\
0c354e4abc9804f1746c08ca18217c32905e462e36ce3be39e772c180e86039b2783a\
2ec07a28fb5c55df06f4c52c9de2bcbf6955817183995497cea956ae515d2261898fa0\
51015728e5a8aacaa68ffffffffffffffff";

/// Source of verified safe primes.
pub trait GroupProvider {
    /// Returns a safe prime of `bits` bits.
    fn generate_safe_prime(&self, bits: usize) -> Result<BigUint>;
}

/// In-process safe prime generation backed by `num-primes` (Miller-Rabin).
#[derive(Debug, Clone, Copy, Default)]
pub struct NumPrimesProvider;

impl GroupProvider for NumPrimesProvider {
    fn generate_safe_prime(&self, bits: usize) -> Result<BigUint> {
        if bits < MIN_BIT_LENGTH {
            return Err(Error::GroupGeneration(format!(
                "requested {} bits, minimum is {}",
                bits, MIN_BIT_LENGTH
            )));
        }
        debug!(bits, "generating safe prime");
        for _ in 0..MAX_PRIME_ATTEMPTS {
            // num-primes may hand back a prime one bit short
            let p = Generator::safe_prime(bits);
            if p.bits() == bits {
                debug!(bits, "safe prime generated");
                return Ok(p);
            }
            debug!(bits, actual_bits = p.bits(), "safe prime has wrong width, retrying");
        }
        warn!(bits, "no safe prime of the requested width");
        Err(Error::GroupGeneration(format!(
            "no {}-bit safe prime after {} attempts",
            bits, MAX_PRIME_ATTEMPTS
        )))
    }
}

/// Provider that always hands out one pre-agreed safe prime.
#[derive(Debug, Clone)]
pub struct FixedPrimeProvider {
    prime: BigUint,
}

impl FixedPrimeProvider {
    pub fn new(prime: BigUint) -> Self {
        FixedPrimeProvider { prime }
    }

    /// The 2048-bit safe prime of RFC 3526 https://tools.ietf.org/html/rfc3526.
    pub fn rfc3526() -> Self {
        FixedPrimeProvider::new(rfc3526_prime())
    }
}

impl GroupProvider for FixedPrimeProvider {
    fn generate_safe_prime(&self, bits: usize) -> Result<BigUint> {
        if self.prime.bits() != bits {
            return Err(Error::GroupGeneration(format!(
                "fixed prime has {} bits, {} requested",
                self.prime.bits(),
                bits
            )));
        }
        Ok(self.prime.clone())
    }
}

pub(crate) fn rfc3526_prime() -> BigUint {
    BigUint::parse_bytes(RFC3526_2048_HEX, 16).expect("RFC 3526 prime is valid hex")
}

/// Primality test that is exact for small inputs and Miller-Rabin above.
pub fn is_prime(n: &BigUint) -> bool {
    match n.to_u64() {
        Some(small) if small < TRIAL_DIVISION_LIMIT => is_small_prime(small),
        _ => Verification::is_prime(n),
    }
}

/// True iff `p` and `(p - 1) / 2` are both prime.
pub fn is_safe_prime(p: &BigUint) -> bool {
    p.is_odd() && is_prime(p) && is_prime(&((p - BigUint::one()) >> 1))
}

fn is_small_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
