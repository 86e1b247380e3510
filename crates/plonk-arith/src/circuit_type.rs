//! Arithmetization families

use plonk_field::SerializationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gate arithmetization family a circuit was built with.
///
/// The discriminant is the wire value stored in serialized keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum CircuitType {
    Standard = 0,
    Turbo = 1,
    Ultra = 2,
}

impl CircuitType {
    /// Number of wires per gate
    pub fn program_width(&self) -> usize {
        match self {
            CircuitType::Standard => 3,
            CircuitType::Turbo | CircuitType::Ultra => 4,
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    pub fn name(&self) -> &'static str {
        match self {
            CircuitType::Standard => "standard",
            CircuitType::Turbo => "turbo",
            CircuitType::Ultra => "ultra",
        }
    }
}

impl TryFrom<u32> for CircuitType {
    type Error = SerializationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CircuitType::Standard),
            1 => Ok(CircuitType::Turbo),
            2 => Ok(CircuitType::Ultra),
            other => Err(SerializationError::UnknownCircuitType(other)),
        }
    }
}

impl FromStr for CircuitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(CircuitType::Standard),
            "turbo" => Ok(CircuitType::Turbo),
            "ultra" => Ok(CircuitType::Ultra),
            other => Err(format!("unknown circuit type '{}'", other)),
        }
    }
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
