//! Circuit field elements

use crate::{BuilderError, BuilderId, CircuitBuilder, Result};
use plonk_field::Scalar;
use std::fmt;
use std::marker::PhantomData;

/// A field element living inside a circuit.
///
/// Carries the witness index it occupies in its builder, the owning builder's
/// identity and the concrete value the witness was assigned. Two elements are
/// equal only when they belong to the same builder and carry the same value.
pub struct FieldT<B> {
    witness_index: u32,
    builder_id: BuilderId,
    value: Scalar,
    _builder: PhantomData<fn() -> B>,
}

impl<B: CircuitBuilder> FieldT<B> {
    /// Allocates a fresh witness holding `value`
    pub fn from_witness(builder: &mut B, value: Scalar) -> Self {
        let witness_index = builder.add_variable(value);
        Self {
            witness_index,
            builder_id: builder.id(),
            value,
            _builder: PhantomData,
        }
    }

    /// Wraps an existing witness of `builder`
    pub fn from_witness_index(builder: &B, witness_index: u32) -> Result<Self> {
        let value = builder.get_variable(witness_index)?;
        Ok(Self {
            witness_index,
            builder_id: builder.id(),
            value,
            _builder: PhantomData,
        })
    }

    /// Fails unless this element was allocated by `builder`
    pub fn check_owner(&self, builder: &B) -> Result<()> {
        if self.builder_id == builder.id() {
            Ok(())
        } else {
            Err(BuilderError::ForeignWitness {
                expected: builder.id(),
                found: self.builder_id,
            })
        }
    }

    pub fn set_public(&self, builder: &mut B) -> Result<()> {
        self.check_owner(builder)?;
        builder.set_public_input(self.witness_index)
    }
}

impl<B> FieldT<B> {
    pub fn get_value(&self) -> Scalar {
        self.value
    }

    pub fn witness_index(&self) -> u32 {
        self.witness_index
    }

    pub fn builder_id(&self) -> BuilderId {
        self.builder_id
    }
}

impl<B> Clone for FieldT<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for FieldT<B> {}

impl<B> PartialEq for FieldT<B> {
    fn eq(&self, other: &Self) -> bool {
        self.builder_id == other.builder_id && self.value == other.value
    }
}

impl<B> fmt::Debug for FieldT<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldT")
            .field("witness_index", &self.witness_index)
            .field("builder", &self.builder_id)
            .field("value", &self.value)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StandardCircuitBuilder;

    #[test]
    fn test_witness_carries_value() {
        let mut builder = StandardCircuitBuilder::new();
        let x = FieldT::from_witness(&mut builder, Scalar::from(11u64));
        assert_eq!(x.get_value(), Scalar::from(11u64));
        assert_eq!(builder.get_variable(x.witness_index()).unwrap(), x.get_value());

        let again = FieldT::from_witness_index(&builder, x.witness_index()).unwrap();
        assert_eq!(again, x);
    }

    #[test]
    fn test_equality_is_per_builder() {
        let mut b1 = StandardCircuitBuilder::new();
        let mut b2 = StandardCircuitBuilder::new();
        let x = FieldT::from_witness(&mut b1, Scalar::from(1u64));
        let y = FieldT::from_witness(&mut b1, Scalar::from(1u64));
        let z = FieldT::from_witness(&mut b2, Scalar::from(1u64));
        assert_eq!(x, y);
        assert_ne!(x, z);
    }

    #[test]
    fn test_set_public_checks_owner() {
        let mut b1 = StandardCircuitBuilder::new();
        let mut b2 = StandardCircuitBuilder::new();
        let x = FieldT::from_witness(&mut b1, Scalar::from(1u64));
        assert!(matches!(
            x.set_public(&mut b2),
            Err(BuilderError::ForeignWitness { .. })
        ));
        x.set_public(&mut b1).unwrap();
        assert!(b1.is_public_input(x.witness_index()));
    }
}
