//! # PLONK Arithmetization
//!
//! Circuit builders and the dual native/circuit representation of records:
//! - Arithmetization families and their gate widths
//! - A standard builder with arithmetic and compression gates
//! - `FieldT`, the circuit field element
//! - Records generic over their representation, with conversions between
//!   the native and circuit forms

pub mod builder;
pub mod circuit_type;
pub mod field_t;
pub mod record;
pub mod types;

pub use builder::{BuilderId, CircuitBuilder, Gate, GateConstraint, StandardCircuitBuilder};
pub use circuit_type::CircuitType;
pub use field_t::FieldT;
pub use record::{CircuitRecord, FieldRecord, NativeRecord};
pub use types::{CircuitTypes, NativeTypes, Representation};

use thiserror::Error;

/// Errors raised while building circuits
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("Invalid witness index: {index} >= {max}")]
    InvalidWitnessIndex { index: u32, max: usize },
    #[error("Witness {0} is already a public input")]
    AlreadyPublic(u32),
    #[error("Witness belongs to {found}, not {expected}")]
    ForeignWitness { expected: BuilderId, found: BuilderId },
    #[error("Constraint violation at row {row}: {constraint}")]
    ConstraintViolation { row: usize, constraint: String },
    #[error("Circuit failed: {0}")]
    Failed(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
