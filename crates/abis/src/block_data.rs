//! Historic block data a transaction is proven against

use crate::GeneratorIndex;
use plonk_arith::{CircuitBuilder, CircuitTypes, FieldT, NativeTypes, Representation};
use plonk_field::Scalar;

/// Tree roots and globals of the block a transaction builds on.
///
/// Zero-valued until the block builder fills it in; left untouched once its
/// hash has been taken.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockDataCommitment<T: Representation> {
    pub private_data_tree_root: T::Fr,
    pub nullifier_tree_root: T::Fr,
    pub contract_tree_root: T::Fr,
    pub l1_to_l2_messages_tree_root: T::Fr,
    pub blocks_tree_root: T::Fr,
    pub private_kernel_vk_tree_root: T::Fr,
    pub public_data_tree_root: T::Fr,
    pub prev_global_variables_hash: T::Fr,
}

field_record!(BlockDataCommitment {
    private_data_tree_root,
    nullifier_tree_root,
    contract_tree_root,
    l1_to_l2_messages_tree_root,
    blocks_tree_root,
    private_kernel_vk_tree_root,
    public_data_tree_root,
    prev_global_variables_hash,
});

/// Hash committing to a block's globals and state roots
pub fn compute_block_hash<T: Representation>(
    ctx: &mut T::Context,
    globals_hash: &T::Fr,
    private_data_tree_root: &T::Fr,
    nullifier_tree_root: &T::Fr,
    contract_tree_root: &T::Fr,
    l1_to_l2_messages_tree_root: &T::Fr,
    public_data_tree_root: &T::Fr,
) -> T::Fr {
    let inputs = [
        globals_hash.clone(),
        private_data_tree_root.clone(),
        nullifier_tree_root.clone(),
        contract_tree_root.clone(),
        l1_to_l2_messages_tree_root.clone(),
        public_data_tree_root.clone(),
    ];
    T::compress(ctx, &inputs, GeneratorIndex::BlockHash.as_u32())
}

impl<T: Representation> BlockDataCommitment<T> {
    /// The block hash of this data.
    ///
    /// `blocks_tree_root` and `private_kernel_vk_tree_root` are not hash
    /// inputs.
    pub fn hash_with(&self, ctx: &mut T::Context) -> T::Fr {
        compute_block_hash::<T>(
            ctx,
            &self.prev_global_variables_hash,
            &self.private_data_tree_root,
            &self.nullifier_tree_root,
            &self.contract_tree_root,
            &self.l1_to_l2_messages_tree_root,
            &self.public_data_tree_root,
        )
    }
}

impl BlockDataCommitment<NativeTypes> {
    pub fn hash(&self) -> Scalar {
        self.hash_with(&mut ())
    }
}

impl<B: CircuitBuilder> BlockDataCommitment<CircuitTypes<B>> {
    pub fn hash(&self, builder: &mut B) -> FieldT<B> {
        self.hash_with(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlobalVariables;
    use plonk_arith::{BuilderError, CircuitRecord, FieldRecord, NativeRecord, StandardCircuitBuilder};
    use proptest::prelude::*;

    fn sample() -> BlockDataCommitment<NativeTypes> {
        BlockDataCommitment {
            private_data_tree_root: Scalar::from(1u64),
            nullifier_tree_root: Scalar::from(2u64),
            contract_tree_root: Scalar::from(3u64),
            l1_to_l2_messages_tree_root: Scalar::from(4u64),
            blocks_tree_root: Scalar::from(5u64),
            private_kernel_vk_tree_root: Scalar::from(6u64),
            public_data_tree_root: Scalar::from(7u64),
            prev_global_variables_hash: GlobalVariables::new(1, 1, 9, 0).hash(),
        }
    }

    #[test]
    fn test_excluded_roots_do_not_change_hash() {
        let mut with_root = BlockDataCommitment::<NativeTypes>::default();
        with_root.prev_global_variables_hash = Scalar::from(5u64);
        with_root.blocks_tree_root = Scalar::from(42u64);

        let mut without_root = with_root.clone();
        without_root.blocks_tree_root = Scalar::from(0u64);
        assert_eq!(with_root.hash(), without_root.hash());
        assert_ne!(with_root, without_root);

        without_root.private_kernel_vk_tree_root = Scalar::from(8u64);
        assert_eq!(with_root.hash(), without_root.hash());
    }

    #[test]
    fn test_included_roots_change_hash() {
        let base = sample();
        let mut changed = base.clone();
        changed.public_data_tree_root = Scalar::from(70u64);
        assert_ne!(base.hash(), changed.hash());
    }

    #[test]
    fn test_set_public_marks_all_fields_in_order() {
        let mut builder = StandardCircuitBuilder::new();
        let padding = builder.add_variable(Scalar::from(0u64));
        builder.set_public_input(padding).unwrap();

        let circuit = sample().to_circuit_type(&mut builder);
        circuit.set_public(&mut builder).unwrap();

        let expected: Vec<u32> = std::iter::once(padding)
            .chain(circuit.fields().into_iter().map(|f| f.witness_index()))
            .collect();
        assert_eq!(builder.public_inputs(), expected.as_slice());
        assert_eq!(builder.num_public_inputs(), 1 + 8);
        assert_eq!(
            circuit.set_public(&mut builder),
            Err(BuilderError::AlreadyPublic(circuit.private_data_tree_root.witness_index()))
        );
    }

    #[test]
    fn test_circuit_hash_matches_native() {
        let native = sample();
        let mut builder = StandardCircuitBuilder::new();
        let circuit = native.to_circuit_type(&mut builder);
        let hashed = circuit.hash(&mut builder);

        assert_eq!(hashed.get_value(), native.hash());
        assert_eq!(hashed.builder_id(), builder.id());
        assert!(!builder.failed());
        assert!(builder.check_circuit().is_ok());
    }

    #[test]
    fn test_mixed_builders_fail_the_circuit() {
        let mut b1 = StandardCircuitBuilder::new();
        let mut b2 = StandardCircuitBuilder::new();
        let circuit = sample().to_circuit_type(&mut b1);
        let _ = circuit.hash(&mut b2);
        assert!(b2.failed());
        assert!(!b1.failed());
    }

    #[test]
    fn test_equality_across_builders_is_false() {
        let mut b1 = StandardCircuitBuilder::new();
        let mut b2 = StandardCircuitBuilder::new();
        let x = sample().to_circuit_type(&mut b1);
        let y = sample().to_circuit_type(&mut b2);
        assert_ne!(x, y);
        assert_eq!(x.to_native_type(), y.to_native_type());
    }

    #[test]
    fn test_field_bytes() {
        let data = sample();
        let bytes = data.to_field_bytes();
        assert_eq!(bytes.len(), 8 * 32);
        assert_eq!(BlockDataCommitment::<NativeTypes>::from_field_bytes(&bytes).unwrap(), data);
    }

    #[test]
    fn test_display_order() {
        let text = sample().to_string();
        let names: Vec<&str> = text.lines().filter_map(|l| l.split(':').next()).collect();
        assert_eq!(
            names,
            [
                "private_data_tree_root",
                "nullifier_tree_root",
                "contract_tree_root",
                "l1_to_l2_messages_tree_root",
                "blocks_tree_root",
                "private_kernel_vk_tree_root",
                "public_data_tree_root",
                "prev_global_variables_hash",
            ]
        );
    }

    proptest! {
        #[test]
        fn test_native_circuit_native_identity(values in proptest::array::uniform8(any::<u64>())) {
            let native = BlockDataCommitment::<NativeTypes>::from_fields(values.map(Scalar::from)).unwrap();
            let mut builder = StandardCircuitBuilder::new();
            let circuit = native.to_circuit_type(&mut builder);
            prop_assert_eq!(builder.num_variables(), 8);
            prop_assert_eq!(circuit.to_native_type(), native);
        }
    }
}
