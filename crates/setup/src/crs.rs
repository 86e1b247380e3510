//! Verifier-side reference string structures

use plonk_field::{G1Affine, G2Affine};
use serde::{Deserialize, Serialize};

/// The slice of a structured reference string a verifier needs.
///
/// Loaded once and never mutated; keys hold it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierCrs {
    /// Generator of G1 (`[1]_1`)
    g1_generator: G1Affine,
    /// Toxic scalar in G2 (`[x]_2`)
    g2_x: G2Affine,
    /// Number of monomial G1 points the underlying setup provides
    num_points: usize,
}

impl VerifierCrs {
    pub fn new(g1_generator: G1Affine, g2_x: G2Affine, num_points: usize) -> Self {
        Self {
            g1_generator,
            g2_x,
            num_points,
        }
    }

    pub fn g1_generator(&self) -> &G1Affine {
        &self.g1_generator
    }

    pub fn g2_x(&self) -> &G2Affine {
        &self.g2_x
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Whether the setup has enough points for a circuit of `circuit_size`
    pub fn supports(&self, circuit_size: usize) -> bool {
        self.num_points >= circuit_size
    }
}

/// Reference string parameters for development and tooling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CrsConfig {
    /// Number of G1 points the generated setup claims to provide
    pub num_points: usize,
    /// Seed for the deterministic toxic scalar
    pub seed: u64,
}

impl Default for CrsConfig {
    fn default() -> Self {
        Self {
            num_points: 1 << 20,
            seed: 0,
        }
    }
}
