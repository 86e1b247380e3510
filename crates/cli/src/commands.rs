//! Subcommands of `vk-tool`

use crate::{block::BlockDataFile, common::*, CliError, Result};
use clap::{Parser, Subcommand};
use plonk_arith::CircuitType;
use plonk_field::{scalar_to_hex, Decode};
use plonk_srs::{get_crs_factory, init_crs_factory, CrsError, CrsFactory, MemCrsFactory};
use plonk_verifier::{VerificationKey, VerificationKeyData};
use rollup_abis::GeneratorIndex;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "vk-tool")]
#[command(about = "PLONK verification key and block data tool")]
#[command(version)]
pub struct Cli {
    /// Path to a JSON tool configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the debug form of a binary key
    Inspect {
        /// Path to the binary key
        key: PathBuf,
    },

    /// SHA-256 fingerprint of a key
    Hash {
        /// Path to the binary key
        key: PathBuf,
    },

    /// Field fingerprint of a key under a hash index
    Compress {
        /// Path to the binary key
        key: PathBuf,

        /// Hash domain separator
        #[arg(long, default_value_t = GeneratorIndex::VerificationKey.as_u32())]
        hash_index: u32,
    },

    /// Derive a key from a circuit shape and write its binary form
    Shape {
        /// Number of gates
        #[arg(long)]
        gates: usize,

        /// Number of public inputs
        #[arg(long, default_value = "0")]
        public_inputs: usize,

        /// Arithmetization: standard, turbo or ultra
        #[arg(long, default_value = "standard")]
        circuit_type: CircuitType,

        /// Output path
        #[arg(short, long, default_value = "vk.bin")]
        output: PathBuf,
    },

    /// Hash a JSON block data file
    BlockHash {
        /// Path to the JSON block data
        file: PathBuf,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Inspect { .. } => "inspect",
            Command::Hash { .. } => "hash",
            Command::Compress { .. } => "compress",
            Command::Shape { .. } => "shape",
            Command::BlockHash { .. } => "block-hash",
        }
    }
}

/// Installs the configured reference string as the process-wide factory,
/// unless one is already installed.
pub fn install_crs(config: &ToolConfig) -> Result<Arc<dyn CrsFactory>> {
    if let Ok(factory) = get_crs_factory() {
        return Ok(factory);
    }
    let factory: Arc<dyn CrsFactory> = Arc::new(MemCrsFactory::from_config(&config.crs));
    match init_crs_factory(factory.clone()) {
        Ok(()) => Ok(factory),
        // Lost a race with another initializer; use theirs.
        Err(CrsError::AlreadyInitialized) => Ok(get_crs_factory()?),
        Err(e) => Err(e.into()),
    }
}

/// Runs one subcommand and returns what it prints
pub fn run(cli: Cli) -> Result<String> {
    let config = ToolConfig::load_or_default(cli.config.as_deref())?;
    match cli.command {
        Command::Inspect { key } => inspect(&FileOps::read_binary(&key)?),
        Command::Hash { key } => {
            // Keys from `shape` have no commitments yet, so this does not go
            // through `VerificationKey::read_from`.
            let crs = install_crs(&config)?.get_verifier_crs();
            let data = VerificationKeyData::from_bytes(&FileOps::read_binary(&key)?)?;
            Ok(VerificationKey::new(data, crs)?.sha256_hex())
        }
        Command::Compress { key, hash_index } => {
            let data = VerificationKeyData::from_bytes(&FileOps::read_binary(&key)?)?;
            data.validate()?;
            Ok(scalar_to_hex(&data.compress_native(hash_index)))
        }
        Command::Shape {
            gates,
            public_inputs,
            circuit_type,
            output,
        } => {
            let crs = install_crs(&config)?.get_verifier_crs();
            let key =
                VerificationKey::from_circuit_shape(gates, public_inputs, crs, circuit_type)?;
            FileOps::write_binary(&key.to_bytes(), &output)?;
            tracing::info!(
                path = %output.display(),
                circuit_size = key.circuit_size(),
                "wrote verification key"
            );
            Ok(key.sha256_hex())
        }
        Command::BlockHash { file } => {
            let block: BlockDataFile = FileOps::read_json(&file)?;
            Ok(scalar_to_hex(&block.to_commitment()?.hash()))
        }
    }
}

fn inspect(bytes: &[u8]) -> Result<String> {
    let data = VerificationKeyData::from_bytes(bytes)?;
    let mut out = data.to_string();
    let missing = data.missing_commitments();
    if !missing.is_empty() {
        out.push_str(&format!("\nmissing commitments: {}", missing.join(", ")));
    }
    Ok(out)
}
