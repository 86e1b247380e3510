//! Reference string providers

use crate::{CrsConfig, VerifierCrs};
use ark_bn254::{G1Projective, G2Projective};
use ark_ec::{CurveGroup, Group};
use ark_ff::UniformRand;
use plonk_field::{G2Affine, Scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;

/// Source of verifier reference strings.
///
/// Implementations hand out clones of one shared handle; callers never get a
/// private copy of the underlying points.
pub trait CrsFactory: Send + Sync {
    fn get_verifier_crs(&self) -> Arc<VerifierCrs>;
}

/// Factory over a reference string held in memory
#[derive(Debug, Clone)]
pub struct MemCrsFactory {
    verifier_crs: Arc<VerifierCrs>,
}

impl MemCrsFactory {
    /// Wraps an already-loaded `[x]_2` point
    pub fn new(num_points: usize, g2_x: G2Affine) -> Self {
        let crs = VerifierCrs::new(G1Projective::generator().into_affine(), g2_x, num_points);
        Self {
            verifier_crs: Arc::new(crs),
        }
    }

    /// Derives an insecure setup from a seed. The toxic scalar is recoverable
    /// from the seed, so this is only for tests and local tooling.
    pub fn from_seed(num_points: usize, seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let x = Scalar::rand(&mut rng);
        let g2_x = (G2Projective::generator() * x).into_affine();
        Self::new(num_points, g2_x)
    }

    pub fn from_config(config: &CrsConfig) -> Self {
        Self::from_seed(config.num_points, config.seed)
    }
}

impl CrsFactory for MemCrsFactory {
    fn get_verifier_crs(&self) -> Arc<VerifierCrs> {
        Arc::clone(&self.verifier_crs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_shares_handle() {
        let factory = MemCrsFactory::from_seed(64, 1);
        let a = factory.get_verifier_crs();
        let b = factory.get_verifier_crs();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.num_points(), 64);
    }

    #[test]
    fn test_seeded_setup_is_deterministic() {
        let a = MemCrsFactory::from_seed(8, 42).get_verifier_crs();
        let b = MemCrsFactory::from_seed(8, 42).get_verifier_crs();
        let c = MemCrsFactory::from_seed(8, 43).get_verifier_crs();
        assert_eq!(a.g2_x(), b.g2_x());
        assert_ne!(a.g2_x(), c.g2_x());
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_from_config() {
        let config = CrsConfig {
            num_points: 32,
            seed: 5,
        };
        let crs = MemCrsFactory::from_config(&config).get_verifier_crs();
        assert!(crs.supports(32));
        assert!(!crs.supports(64));
    }
}
