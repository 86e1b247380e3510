//! # PLONK Field Layer
//!
//! BN254 field and curve types shared by the verification-key and circuit
//! crates, together with the pieces every higher layer leans on:
//!
//! - Evaluation domain descriptors derived from a power-of-two circuit size
//! - A big-endian binary codec for keys and records
//! - A domain-separated hash primitive over scalars

pub mod domain;
pub mod hash;
pub mod serialize;

pub use domain::EvaluationDomain;
pub use hash::{compress_native, hash_buffer};
pub use serialize::{Decode, Encode, Reader, SerializationError, Writer};

use ark_ff::{BigInteger, PrimeField};

/// The scalar field of BN254
pub type Scalar = ark_bn254::Fr;

/// The base field of BN254
pub type Fq = ark_bn254::Fq;

/// Affine point on the BN254 G1 curve
pub type G1Affine = ark_bn254::G1Affine;

/// Affine point on the BN254 G2 curve
pub type G2Affine = ark_bn254::G2Affine;

/// Error types for field operations
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid field element: {0}")]
    InvalidElement(String),
    #[error("Domain size {0} must be a non-zero power of two")]
    InvalidDomainSize(usize),
    #[error("Domain size 2^{log2} exceeds the field two-adicity {max}")]
    DomainTooLarge { log2: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, FieldError>;

/// Big-endian 32-byte encoding of a scalar
pub fn scalar_to_bytes(value: &Scalar) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&value.into_bigint().to_bytes_be());
    out
}

/// `0x`-prefixed hex form of a scalar
pub fn scalar_to_hex(value: &Scalar) -> String {
    format!("0x{}", hex::encode(scalar_to_bytes(value)))
}

/// Parses a `0x`-prefixed (or bare) hex string of at most 32 bytes into a
/// canonical scalar.
pub fn scalar_from_hex(text: &str) -> Result<Scalar> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(&padded).map_err(|e| FieldError::InvalidElement(e.to_string()))?;
    if bytes.len() > 32 {
        return Err(FieldError::InvalidElement(format!(
            "{} bytes exceeds 32",
            bytes.len()
        )));
    }
    let mut be = [0u8; 32];
    be[32 - bytes.len()..].copy_from_slice(&bytes);
    serialize::scalar_from_be_bytes(&be)
        .ok_or_else(|| FieldError::InvalidElement(format!("{} is not below the modulus", text)))
}
