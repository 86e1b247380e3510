//! Records of field elements with a native and a circuit form
//!
//! A record type is written once, generic over its [`Representation`], and
//! implements [`FieldRecord`] to enumerate its members in declaration order.
//! The direction-specific operations come from blanket traits:
//! [`NativeRecord`] moves a native record into a circuit, [`CircuitRecord`]
//! reads a circuit record back out and exposes it as public input. Calling
//! either on the wrong representation does not type-check.

use crate::{BuilderError, CircuitBuilder, CircuitTypes, FieldT, NativeTypes, Representation, Result};
use plonk_field::{Reader, Scalar, SerializationError, Writer};
use std::collections::HashSet;

/// A fixed-shape aggregate of field elements
pub trait FieldRecord<T: Representation>: Sized {
    /// Number of members, identical for every representation
    const NUM_FIELDS: usize;

    /// The same record in another representation
    type Rebind<U: Representation>;

    /// Members in declaration order
    fn fields(&self) -> Vec<&T::Fr>;

    /// Builds the record in representation `U` by converting each member, in
    /// declaration order.
    fn map_fields<U, F>(&self, f: F) -> Self::Rebind<U>
    where
        U: Representation,
        F: FnMut(&T::Fr) -> U::Fr;

    /// Reassembles a record from members in declaration order. Returns `None`
    /// unless exactly [`Self::NUM_FIELDS`] members are supplied.
    fn from_fields<I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = T::Fr>;
}

/// Operations on native records
pub trait NativeRecord: FieldRecord<NativeTypes> {
    /// Allocates every member as a fresh witness of `builder`, in declaration
    /// order.
    fn to_circuit_type<B: CircuitBuilder>(
        &self,
        builder: &mut B,
    ) -> <Self as FieldRecord<NativeTypes>>::Rebind<CircuitTypes<B>> {
        self.map_fields::<CircuitTypes<B>, _>(|value: &Scalar| FieldT::from_witness(builder, *value))
    }

    /// Members as consecutive 32-byte big-endian scalars
    fn to_field_bytes(&self) -> Vec<u8> {
        let mut writer = Writer::new();
        for field in self.fields() {
            writer.write_scalar(field);
        }
        writer.into_bytes()
    }

    fn from_field_bytes(bytes: &[u8]) -> std::result::Result<Self, SerializationError> {
        let mut reader = Reader::new(bytes);
        let mut fields = Vec::with_capacity(Self::NUM_FIELDS);
        for _ in 0..Self::NUM_FIELDS {
            fields.push(reader.read_scalar()?);
        }
        reader.finish()?;
        Self::from_fields(fields)
            .ok_or_else(|| SerializationError::InvalidValue("record arity mismatch".to_string()))
    }
}

impl<R: FieldRecord<NativeTypes>> NativeRecord for R {}

/// Operations on circuit records
pub trait CircuitRecord<B: CircuitBuilder>: FieldRecord<CircuitTypes<B>> {
    /// Reads the carried value of every member
    fn to_native_type(&self) -> <Self as FieldRecord<CircuitTypes<B>>>::Rebind<NativeTypes> {
        self.map_fields::<NativeTypes, _>(|field: &FieldT<B>| field.get_value())
    }

    /// Exposes every member as a public input, in declaration order.
    ///
    /// All members are validated before any is marked, so a failed call
    /// leaves the builder's public inputs untouched.
    fn set_public(&self, builder: &mut B) -> Result<()> {
        let fields = self.fields();
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            field.check_owner(builder)?;
            let index = field.witness_index();
            if builder.is_public_input(index) || !seen.insert(index) {
                return Err(BuilderError::AlreadyPublic(index));
            }
        }

        for field in fields {
            builder.set_public_input(field.witness_index())?;
        }
        tracing::trace!(
            builder = %builder.id(),
            count = Self::NUM_FIELDS,
            "exposed record as public inputs"
        );
        Ok(())
    }
}

impl<B: CircuitBuilder, R: FieldRecord<CircuitTypes<B>>> CircuitRecord<B> for R {}
