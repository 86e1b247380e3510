//! PLONK verification keys
//!
//! This crate provides the key side of the PLONK verifier:
//! - Polynomial manifests per arithmetization
//! - Serializable key snapshots with fingerprints for caching and recursion
//! - Keys bound to a shared verifier reference string

pub mod polynomial_manifest;
pub mod verification_key;

pub use polynomial_manifest::{PolynomialDescriptor, PolynomialManifest, PolynomialSource};
pub use verification_key::{VerificationKey, VerificationKeyData};

use plonk_field::SerializationError;
use plonk_srs::CrsError;
use thiserror::Error;

/// Error types for verification key operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationKeyError {
    #[error("Malformed key: {0}")]
    MalformedKey(String),
    #[error("Reference string has {available} points, circuit needs {required}")]
    InsufficientCrs { required: usize, available: usize },
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("Reference string error: {0}")]
    Crs(#[from] CrsError),
}

pub type Result<T> = std::result::Result<T, VerificationKeyError>;
