// Copyright 2020-2026 MathxH Chen.
//
// Code is licensed under MIT Apache Dual License

//! Error types for key generation and signing.
//!
//! Verification never produces an error: a wrong or malformed signature is
//! reported as `false` by the verifier.

use thiserror::Error;

/// Result type for signature scheme operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating groups, keys or signatures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The safe prime provider failed or returned a non-safe prime
    #[error("group generation failed: {0}")]
    GroupGeneration(String),

    /// The secure randomness source could not supply entropy
    #[error("secure randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// The private key violates a structural invariant
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key violates a structural invariant
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Externally supplied group parameters are inconsistent
    #[error("invalid group parameters: {0}")]
    InvalidGroupParameters(String),

    /// A random integer was requested from an empty interval
    #[error("cannot sample from an empty range")]
    EmptyRange,
}
