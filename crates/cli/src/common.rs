//! Common utilities for the CLI
//!
//! Configuration loading and file access shared by every subcommand.

use crate::{CliError, Result};
use plonk_srs::CrsConfig;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Tool configuration, read from a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolConfig {
    /// Reference string keys are bound to
    pub crs: CrsConfig,
}

impl ToolConfig {
    /// Loads the configuration at `path`. No path, or a path with no file
    /// behind it, gives the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if FileOps::file_exists(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                FileOps::read_json(path)
            }
            Some(path) => {
                tracing::info!(path = %path.display(), "configuration file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

/// File operations used by the subcommands
pub struct FileOps;

impl FileOps {
    /// Reads a JSON file and deserializes it
    pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Writes data to a JSON file
    pub fn write_json<T: Serialize>(data: &T, path: &Path) -> Result<()> {
        let file = Self::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), data)?;
        Ok(())
    }

    pub fn read_binary(path: &Path) -> Result<Vec<u8>> {
        if !Self::file_exists(path) {
            return Err(CliError::MissingFile(path.to_path_buf()));
        }
        let mut data = Vec::new();
        File::open(path)?.read_to_end(&mut data)?;
        Ok(data)
    }

    pub fn write_binary(data: &[u8], path: &Path) -> Result<()> {
        Self::create(path)?.write_all(data)?;
        Ok(())
    }

    pub fn file_exists(path: &Path) -> bool {
        path.is_file()
    }

    fn create(path: &Path) -> Result<File> {
        Ok(OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?)
    }
}
