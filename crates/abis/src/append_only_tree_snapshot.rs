//! Append-only tree snapshots

use plonk_arith::{NativeTypes, Representation};
use plonk_field::Scalar;

/// Root of an append-only tree and the next free leaf
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppendOnlyTreeSnapshot<T: Representation> {
    pub root: T::Fr,
    pub next_available_leaf_index: T::Fr,
}

field_record!(AppendOnlyTreeSnapshot {
    root,
    next_available_leaf_index,
});

impl AppendOnlyTreeSnapshot<NativeTypes> {
    pub fn new(root: Scalar, next_available_leaf_index: u64) -> Self {
        Self {
            root,
            next_available_leaf_index: Scalar::from(next_available_leaf_index),
        }
    }
}
