//! Representation selectors
//!
//! Records are generic over a [`Representation`], which fixes the concrete
//! field type of every member and the context hashing needs. The same record
//! definition therefore serves both the native computation and the circuit.

use crate::{CircuitBuilder, FieldT};
use plonk_field::{compress_native, Scalar};
use std::fmt;
use std::marker::PhantomData;

pub trait Representation: Clone + Copy + fmt::Debug + PartialEq + Default {
    /// Field element type of this representation
    type Fr: Clone + fmt::Debug + PartialEq;

    /// What hashing needs besides the inputs: nothing natively, the builder
    /// in-circuit.
    type Context;

    fn compress(ctx: &mut Self::Context, inputs: &[Self::Fr], hash_index: u32) -> Self::Fr;

    /// Concrete value an element carries
    fn value(fr: &Self::Fr) -> Scalar;
}

/// Plain scalars computed outside any circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NativeTypes;

impl Representation for NativeTypes {
    type Fr = Scalar;
    type Context = ();

    fn compress(_ctx: &mut (), inputs: &[Scalar], hash_index: u32) -> Scalar {
        compress_native(inputs, hash_index)
    }

    fn value(fr: &Scalar) -> Scalar {
        *fr
    }
}

/// Witnesses of a circuit built by `B`
pub struct CircuitTypes<B>(PhantomData<fn() -> B>);

impl<B: CircuitBuilder> Representation for CircuitTypes<B> {
    type Fr = FieldT<B>;
    type Context = B;

    /// Computes the digest from the carried values, allocates it as a witness
    /// and records the compression gate. Inputs owned by another builder flag
    /// the circuit as failed instead of aborting.
    fn compress(builder: &mut B, inputs: &[FieldT<B>], hash_index: u32) -> FieldT<B> {
        let id = builder.id();
        if let Some(foreign) = inputs.iter().find(|f| f.builder_id() != id) {
            builder.failure(format!(
                "hash input from {} used in {}",
                foreign.builder_id(),
                id
            ));
        }

        let values: Vec<Scalar> = inputs.iter().map(FieldT::get_value).collect();
        let output = FieldT::from_witness(builder, compress_native(&values, hash_index));
        let indices: Vec<u32> = inputs.iter().map(FieldT::witness_index).collect();
        builder.create_compress_gate(&indices, output.witness_index(), hash_index);
        output
    }

    fn value(fr: &FieldT<B>) -> Scalar {
        fr.get_value()
    }
}

impl<B> Clone for CircuitTypes<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for CircuitTypes<B> {}

impl<B> Default for CircuitTypes<B> {
    fn default() -> Self {
        CircuitTypes(PhantomData)
    }
}

impl<B> PartialEq for CircuitTypes<B> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<B> Eq for CircuitTypes<B> {}

impl<B> fmt::Debug for CircuitTypes<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CircuitTypes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StandardCircuitBuilder;

    #[test]
    fn test_native_and_circuit_compress_agree() {
        let inputs = [Scalar::from(3u64), Scalar::from(9u64)];
        let native = NativeTypes::compress(&mut (), &inputs, 4);

        let mut builder = StandardCircuitBuilder::new();
        let witnesses: Vec<_> = inputs
            .iter()
            .map(|v| FieldT::from_witness(&mut builder, *v))
            .collect();
        let circuit = CircuitTypes::<StandardCircuitBuilder>::compress(&mut builder, &witnesses, 4);

        assert_eq!(circuit.get_value(), native);
        assert_eq!(builder.num_gates(), 1);
        assert!(!builder.failed());
        assert!(builder.check_circuit().is_ok());
    }

    #[test]
    fn test_foreign_input_flags_failure() {
        let mut b1 = StandardCircuitBuilder::new();
        let mut b2 = StandardCircuitBuilder::new();
        let x = FieldT::from_witness(&mut b1, Scalar::from(1u64));
        let out = CircuitTypes::<StandardCircuitBuilder>::compress(&mut b2, &[x], 0);
        assert!(b2.failed());
        assert_eq!(out.builder_id(), b2.id());
    }
}
