//! Block-level global variables

use crate::GeneratorIndex;
use plonk_arith::{CircuitBuilder, CircuitTypes, FieldT, NativeTypes, Representation};
use plonk_field::Scalar;

/// Globals a block is built against
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobalVariables<T: Representation> {
    pub chain_id: T::Fr,
    pub version: T::Fr,
    pub block_number: T::Fr,
    pub timestamp: T::Fr,
}

field_record!(GlobalVariables {
    chain_id,
    version,
    block_number,
    timestamp,
});

impl<T: Representation> GlobalVariables<T> {
    /// Hash stored by the next block as `prev_global_variables_hash`
    pub fn hash_with(&self, ctx: &mut T::Context) -> T::Fr {
        T::compress(
            ctx,
            &[
                self.chain_id.clone(),
                self.version.clone(),
                self.block_number.clone(),
                self.timestamp.clone(),
            ],
            GeneratorIndex::GlobalVariables.as_u32(),
        )
    }
}

impl GlobalVariables<NativeTypes> {
    pub fn new(chain_id: u64, version: u64, block_number: u64, timestamp: u64) -> Self {
        Self {
            chain_id: Scalar::from(chain_id),
            version: Scalar::from(version),
            block_number: Scalar::from(block_number),
            timestamp: Scalar::from(timestamp),
        }
    }

    pub fn hash(&self) -> Scalar {
        self.hash_with(&mut ())
    }
}

impl<B: CircuitBuilder> GlobalVariables<CircuitTypes<B>> {
    pub fn hash(&self, builder: &mut B) -> FieldT<B> {
        self.hash_with(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plonk_arith::{CircuitRecord, NativeRecord, StandardCircuitBuilder};

    #[test]
    fn test_circuit_hash_matches_native() {
        let globals = GlobalVariables::new(1, 1, 42, 1_700_000_000);
        let mut builder = StandardCircuitBuilder::new();
        let circuit = globals.to_circuit_type(&mut builder);
        let hashed = circuit.hash(&mut builder);

        assert_eq!(hashed.get_value(), globals.hash());
        assert_eq!(circuit.to_native_type(), globals);
        assert!(builder.check_circuit().is_ok());
        assert_eq!(builder.num_gates(), 1);
    }

    #[test]
    fn test_block_number_changes_hash() {
        let a = GlobalVariables::new(1, 1, 42, 0);
        let b = GlobalVariables::new(1, 1, 43, 0);
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_display_lists_fields() {
        let text = GlobalVariables::new(1, 2, 3, 4).to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("chain_id: 0x"));
        let mut builder = StandardCircuitBuilder::new();
        let circuit: GlobalVariables<CircuitTypes<StandardCircuitBuilder>> =
            GlobalVariables::new(1, 2, 3, 4).to_circuit_type(&mut builder);
        assert_eq!(circuit.to_string(), text);
    }
}
