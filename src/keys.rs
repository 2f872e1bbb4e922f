// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

use num_bigint::BigUint;
use std::fmt;
use std::sync::Arc;
use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::group::GroupParameters;
use crate::hash::encode_fixed;
use crate::random::SecureRandom;

/// Public key `y = g^x mod p` together with its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    params: Arc<GroupParameters>,
    y: BigUint,
}

impl PublicKey {
    /// Wraps an externally received `y`, checking that it is an element of the
    /// order-`q` subgroup.
    pub fn new(params: Arc<GroupParameters>, y: BigUint) -> Result<Self> {
        if !params.is_subgroup_element(&y) {
            return Err(Error::InvalidPublicKey(
                "y is not an element of the order-q subgroup".to_string(),
            ));
        }
        Ok(PublicKey { params, y })
    }

    /// Decodes `y` from its fixed-width big-endian form.
    pub fn from_bytes(params: Arc<GroupParameters>, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != params.byte_len() {
            return Err(Error::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                params.byte_len(),
                bytes.len()
            )));
        }
        let y = BigUint::from_bytes_be(bytes);
        Self::new(params, y)
    }

    /// `y` as exactly `params.byte_len()` big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        // y < p always fits
        encode_fixed(&self.y, self.params.byte_len()).unwrap_or_default()
    }

    pub fn params(&self) -> &Arc<GroupParameters> {
        &self.params
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// Private key: the exponent `x` in `[0, q)` and the matching public key.
///
/// `x` is kept as fixed-width big-endian bytes in zeroizing storage and is
/// wiped when the key is dropped. `Debug` never prints it.
#[derive(Clone)]
pub struct PrivateKey {
    public: PublicKey,
    x: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Rebuilds a private key from a stored exponent, recomputing `y = g^x mod p`.
    pub fn from_exponent(params: Arc<GroupParameters>, x: &BigUint) -> Result<Self> {
        if x >= params.q() {
            return Err(Error::InvalidPrivateKey(
                "x must lie in [0, q)".to_string(),
            ));
        }
        let x_bytes = encode_fixed(x, params.byte_len()).ok_or_else(|| {
            Error::InvalidPrivateKey("x does not fit the group encoding".to_string())
        })?;
        let y = params.exp(x);
        Ok(PrivateKey {
            public: PublicKey { params, y },
            x: Zeroizing::new(x_bytes),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn params(&self) -> &Arc<GroupParameters> {
        &self.public.params
    }

    /// The exponent as fixed-width big-endian bytes.
    pub fn to_exponent_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.x.clone()
    }

    /// The exponent, checked against `[0, q)` before use.
    pub(crate) fn exponent(&self) -> Result<BigUint> {
        let x = BigUint::from_bytes_be(&self.x);
        if x >= *self.public.params.q() {
            return Err(Error::InvalidPrivateKey(
                "x must lie in [0, q)".to_string(),
            ));
        }
        Ok(x)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("x", &"<redacted>")
            .finish()
    }
}

/// Draws key pairs for a group.
pub struct KeyGenerator;

impl KeyGenerator {
    /// `x` uniform in `[0, q)`, `y = g^x mod p`.
    pub fn generate<R: SecureRandom + ?Sized>(
        params: &Arc<GroupParameters>,
        rng: &mut R,
    ) -> Result<(PublicKey, PrivateKey)> {
        let x = rng.random_below(params.q())?;
        let privkey = PrivateKey::from_exponent(params.clone(), &x)?;
        trace!(bits = params.bits(), "key pair generated");
        Ok((privkey.public_key().clone(), privkey))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::tests::DeadRng;
    use num_traits::identities::{One, Zero};

    #[test]
    fn test_generate_keypair() {
        let params = GroupParameters::toy();
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let (pk, sk) = KeyGenerator::generate(&params, &mut rng).unwrap();
            let x = sk.exponent().unwrap();
            assert!(x < *params.q());
            assert_eq!(*pk.y(), params.g().modpow(&x, params.p()));
            assert_eq!(pk, *sk.public_key());
        }
    }

    #[test]
    fn test_generate_keypair_covers_whole_range() {
        let params = GroupParameters::toy();
        let mut rng = rand::thread_rng();
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let (_, sk) = KeyGenerator::generate(&params, &mut rng).unwrap();
            let x = sk.exponent().unwrap();
            seen[x.to_bytes_be()[0] as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_generate_keypair_without_entropy() {
        let params = GroupParameters::toy();
        match KeyGenerator::generate(&params, &mut DeadRng) {
            Err(Error::RandomnessUnavailable(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_worked_example_public_key() {
        let params = GroupParameters::toy();
        let sk = PrivateKey::from_exponent(params, &BigUint::from(3_u32)).unwrap();
        assert_eq!(*sk.public_key().y(), BigUint::from(18_u32));
        assert_eq!(*sk.to_exponent_bytes(), vec![3u8]);
    }

    #[test]
    fn test_from_exponent_range() {
        let params = GroupParameters::toy();
        let zero = PrivateKey::from_exponent(params.clone(), &BigUint::zero()).unwrap();
        assert!(zero.public_key().y().is_one());
        assert!(PrivateKey::from_exponent(params.clone(), &BigUint::from(10_u32)).is_ok());
        match PrivateKey::from_exponent(params, &BigUint::from(11_u32)) {
            Err(Error::InvalidPrivateKey(_)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_public_key_validation() {
        let params = GroupParameters::toy();
        assert!(PublicKey::new(params.clone(), BigUint::from(18_u32)).is_ok());
        // non-residue, zero, out of range
        for y in &[5_u32, 0, 23, 41] {
            match PublicKey::new(params.clone(), BigUint::from(*y)) {
                Err(Error::InvalidPublicKey(_)) => {}
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_public_key_bytes() {
        let mut rng = rand::thread_rng();
        let params = GroupParameters::rfc3526(&mut rng).unwrap();
        let (pk, _) = KeyGenerator::generate(&params, &mut rng).unwrap();
        let bytes = pk.to_bytes();
        assert_eq!(bytes.len(), 256);
        assert_eq!(PublicKey::from_bytes(params.clone(), &bytes).unwrap(), pk);
        assert!(PublicKey::from_bytes(params, &bytes[1..]).is_err());
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let params = GroupParameters::toy();
        let sk = PrivateKey::from_exponent(params, &BigUint::from(7_u32)).unwrap();
        let printed = format!("{:?}", sk);
        let expected = format!(
            "PrivateKey {{ public: {:?}, x: \"<redacted>\" }}",
            sk.public_key()
        );
        assert_eq!(printed, expected);
        assert_eq!(format!("{:#?}", sk).matches("<redacted>").count(), 1);
    }
}
