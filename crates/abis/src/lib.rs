//! # Rollup ABIs
//!
//! Records exchanged between the rollup's circuits. Each is written once,
//! generic over its representation, and converts between the native and
//! circuit forms field by field:
//!
//! ```
//! use plonk_arith::{CircuitRecord, NativeRecord, NativeTypes, StandardCircuitBuilder};
//! use plonk_field::Scalar;
//! use rollup_abis::BlockDataCommitment;
//!
//! let mut data = BlockDataCommitment::<NativeTypes>::default();
//! data.nullifier_tree_root = Scalar::from(7u64);
//!
//! let mut builder = StandardCircuitBuilder::new();
//! let circuit = data.to_circuit_type(&mut builder);
//! circuit.set_public(&mut builder).unwrap();
//! assert_eq!(circuit.hash(&mut builder).get_value(), data.hash());
//! assert_eq!(circuit.to_native_type(), data);
//! ```
//!
//! A native record cannot be exposed as public input:
//!
//! ```compile_fail
//! use plonk_arith::{CircuitRecord, NativeTypes, StandardCircuitBuilder};
//! use rollup_abis::BlockDataCommitment;
//!
//! let mut builder = StandardCircuitBuilder::new();
//! let data = BlockDataCommitment::<NativeTypes>::default();
//! data.set_public(&mut builder).unwrap();
//! ```
//!
//! nor read back as native values:
//!
//! ```compile_fail
//! use plonk_arith::{CircuitRecord, NativeTypes};
//! use rollup_abis::BlockDataCommitment;
//!
//! let data = BlockDataCommitment::<NativeTypes>::default();
//! let _ = data.to_native_type();
//! ```
//!
//! and a circuit record cannot be injected into a circuit again:
//!
//! ```compile_fail
//! use plonk_arith::{NativeRecord, NativeTypes, StandardCircuitBuilder};
//! use rollup_abis::BlockDataCommitment;
//!
//! let mut builder = StandardCircuitBuilder::new();
//! let circuit = BlockDataCommitment::<NativeTypes>::default().to_circuit_type(&mut builder);
//! let _ = circuit.to_circuit_type(&mut builder);
//! ```

#[macro_use]
mod macros;

pub mod append_only_tree_snapshot;
pub mod block_data;
pub mod generator_index;
pub mod global_variables;

pub use append_only_tree_snapshot::AppendOnlyTreeSnapshot;
pub use block_data::{compute_block_hash, BlockDataCommitment};
pub use generator_index::GeneratorIndex;
pub use global_variables::GlobalVariables;
