//! # Verification Key Tooling
//!
//! Library behind the `vk-tool` binary: inspect, fingerprint and derive
//! PLONK verification keys, and hash rollup block data.

pub mod block;
pub mod commands;
pub mod common;
pub mod logging;

use plonk_field::{FieldError, SerializationError};
use plonk_srs::CrsError;
use plonk_verifier::VerificationKeyError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Verification key error: {0}")]
    Key(#[from] VerificationKeyError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("Reference string error: {0}")]
    Crs(#[from] CrsError),
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
