//! Evaluation domain descriptors for power-of-two circuit sizes

use crate::{FieldError, Result, Scalar};
use ark_ff::{FftField, Field};
use ark_poly::{EvaluationDomain as _, Radix2EvaluationDomain};

/// Multiplicative subgroup of size `2^k` used to evaluate circuit polynomials.
///
/// A verification key only needs the descriptor (size, roots, inverses), not
/// the FFT machinery, so the values are read off once and kept as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationDomain {
    size: usize,
    log2_size: u32,
    root: Scalar,
    root_inverse: Scalar,
    domain: Scalar,
    domain_inverse: Scalar,
    generator: Scalar,
    generator_inverse: Scalar,
}

impl EvaluationDomain {
    /// Creates the domain of the given size
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || !size.is_power_of_two() {
            return Err(FieldError::InvalidDomainSize(size));
        }
        let log2_size = size.trailing_zeros();
        if log2_size > Scalar::TWO_ADICITY {
            return Err(FieldError::DomainTooLarge {
                log2: log2_size,
                max: Scalar::TWO_ADICITY,
            });
        }

        let radix2 = Radix2EvaluationDomain::<Scalar>::new(size)
            .ok_or(FieldError::InvalidDomainSize(size))?;
        let root = radix2.group_gen();
        let domain = Scalar::from(size as u64);
        let generator = Scalar::GENERATOR;

        Ok(Self {
            size,
            log2_size,
            root,
            root_inverse: invert(root)?,
            domain,
            domain_inverse: invert(domain)?,
            generator,
            generator_inverse: invert(generator)?,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn log2_size(&self) -> u32 {
        self.log2_size
    }

    /// Primitive `size`-th root of unity
    pub fn root(&self) -> Scalar {
        self.root
    }

    pub fn root_inverse(&self) -> Scalar {
        self.root_inverse
    }

    /// The domain size as a field element
    pub fn domain(&self) -> Scalar {
        self.domain
    }

    pub fn domain_inverse(&self) -> Scalar {
        self.domain_inverse
    }

    /// Coset generator (the field's multiplicative generator)
    pub fn generator(&self) -> Scalar {
        self.generator
    }

    pub fn generator_inverse(&self) -> Scalar {
        self.generator_inverse
    }
}

fn invert(value: Scalar) -> Result<Scalar> {
    value
        .inverse()
        .ok_or_else(|| FieldError::InvalidElement("zero has no inverse".to_string()))
}
