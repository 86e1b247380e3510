//! JSON form of block data
//!
//! Field elements are `0x`-prefixed hex strings; absent fields are zero. The
//! previous globals may be given either as their hash or in full.

use crate::{CliError, Result};
use plonk_arith::NativeTypes;
use plonk_field::{scalar_from_hex, Scalar};
use rollup_abis::{BlockDataCommitment, GlobalVariables};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalVariablesFile {
    pub chain_id: u64,
    pub version: u64,
    pub block_number: u64,
    pub timestamp: u64,
}

impl From<&GlobalVariablesFile> for GlobalVariables<NativeTypes> {
    fn from(file: &GlobalVariablesFile) -> Self {
        GlobalVariables::new(file.chain_id, file.version, file.block_number, file.timestamp)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlockDataFile {
    pub private_data_tree_root: Option<String>,
    pub nullifier_tree_root: Option<String>,
    pub contract_tree_root: Option<String>,
    pub l1_to_l2_messages_tree_root: Option<String>,
    pub blocks_tree_root: Option<String>,
    pub private_kernel_vk_tree_root: Option<String>,
    pub public_data_tree_root: Option<String>,
    pub prev_global_variables_hash: Option<String>,
    pub global_variables: Option<GlobalVariablesFile>,
}

fn parse(value: &Option<String>) -> Result<Scalar> {
    match value {
        Some(text) => Ok(scalar_from_hex(text)?),
        None => Ok(Scalar::from(0u64)),
    }
}

impl BlockDataFile {
    pub fn to_commitment(&self) -> Result<BlockDataCommitment<NativeTypes>> {
        let prev_global_variables_hash =
            match (&self.prev_global_variables_hash, &self.global_variables) {
                (Some(_), Some(_)) => {
                    return Err(CliError::InvalidArguments(
                        "give either prev_global_variables_hash or global_variables, not both"
                            .to_string(),
                    ))
                }
                (_, Some(globals)) => GlobalVariables::from(globals).hash(),
                (hash, None) => parse(hash)?,
            };

        Ok(BlockDataCommitment {
            private_data_tree_root: parse(&self.private_data_tree_root)?,
            nullifier_tree_root: parse(&self.nullifier_tree_root)?,
            contract_tree_root: parse(&self.contract_tree_root)?,
            l1_to_l2_messages_tree_root: parse(&self.l1_to_l2_messages_tree_root)?,
            blocks_tree_root: parse(&self.blocks_tree_root)?,
            private_kernel_vk_tree_root: parse(&self.private_kernel_vk_tree_root)?,
            public_data_tree_root: parse(&self.public_data_tree_root)?,
            prev_global_variables_hash,
        })
    }
}
