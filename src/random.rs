// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Secure random integers for exponent and nonce selection.
//!
//! Every cryptographically secure generator from `rand` (`OsRng`, `ThreadRng`,
//! `StdRng`, ...) is a [`SecureRandom`]. Integers are drawn by rejection
//! sampling: fill `ceil(bits(n) / 8)` bytes, clear the bits above `bits(n)`,
//! and discard the candidate if it is not below `n`. Each attempt succeeds with
//! probability greater than 1/2, so the result is uniform in `[0, n)` with no
//! modulo bias.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::identities::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Upper bound on rejection sampling rounds before the source is deemed broken.
/// A healthy source exhausts it with probability below 2^-128.
pub const MAX_SAMPLING_ATTEMPTS: usize = 128;

/// Provider of uniformly random integers, cryptographically unpredictable.
pub trait SecureRandom {
    /// Uniform integer in `[0, bound)`.
    fn random_below(&mut self, bound: &BigUint) -> Result<BigUint>;

    /// Uniform integer in `[low, high)`.
    fn random_range(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint> {
        if low >= high {
            return Err(Error::EmptyRange);
        }
        let offset = self.random_below(&(high - low))?;
        Ok(low + offset)
    }
}

impl<R: RngCore + CryptoRng + ?Sized> SecureRandom for R {
    fn random_below(&mut self, bound: &BigUint) -> Result<BigUint> {
        if bound.is_zero() {
            return Err(Error::EmptyRange);
        }
        let bits = bound.bits();
        let len = Integer::div_ceil(&bits, &8);
        let mask = 0xffu8 >> (len * 8 - bits);
        let mut buf = Zeroizing::new(vec![0u8; len]);

        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            self.try_fill_bytes(&mut buf)
                .map_err(|e| Error::RandomnessUnavailable(e.to_string()))?;
            buf[0] &= mask;
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < *bound {
                return Ok(candidate);
            }
        }
        Err(Error::RandomnessUnavailable(format!(
            "no value below bound after {} attempts",
            MAX_SAMPLING_ATTEMPTS
        )))
    }
}

/// Opens the operating system entropy source.
pub fn os_random() -> Result<rand::rngs::OsRng> {
    rand::rngs::OsRng::new().map_err(|e| Error::RandomnessUnavailable(e.to_string()))
}
