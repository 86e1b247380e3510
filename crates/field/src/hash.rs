//! Domain-separated compression of field elements
//!
//! `hash_index` separates otherwise identical preimages: a block hash and a
//! key fingerprint over the same scalars never collide.

use crate::{scalar_to_bytes, Scalar};
use ark_ff::PrimeField;
use blake2::{Blake2s256, Digest};

const COMPRESS_DOMAIN: &[u8] = b"plonk-field.compress.v1";

/// Bytes packed into each scalar limb by [`hash_buffer`]; 31 bytes always fit
/// below the BN254 scalar modulus.
pub const BYTES_PER_LIMB: usize = 31;

/// Compresses `inputs`, in order, into a single scalar
pub fn compress_native(inputs: &[Scalar], hash_index: u32) -> Scalar {
    let mut hasher = Blake2s256::new();
    hasher.update(COMPRESS_DOMAIN);
    hasher.update(hash_index.to_be_bytes());
    hasher.update((inputs.len() as u64).to_be_bytes());
    for input in inputs {
        hasher.update(scalar_to_bytes(input));
    }
    Scalar::from_be_bytes_mod_order(&hasher.finalize())
}

/// Hashes an arbitrary byte string by packing it into 31-byte limbs.
///
/// The byte length leads the limbs so buffers differing only in trailing zero
/// bytes hash differently.
pub fn hash_buffer(bytes: &[u8], hash_index: u32) -> Scalar {
    let mut limbs = Vec::with_capacity(bytes.len() / BYTES_PER_LIMB + 2);
    limbs.push(Scalar::from(bytes.len() as u64));
    limbs.extend(
        bytes
            .chunks(BYTES_PER_LIMB)
            .map(Scalar::from_be_bytes_mod_order),
    );
    compress_native(&limbs, hash_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_compress_is_deterministic() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let inputs: Vec<Scalar> = (0..6).map(|_| Scalar::rand(&mut rng)).collect();
        assert_eq!(compress_native(&inputs, 3), compress_native(&inputs, 3));
    }

    #[test]
    fn test_compress_is_order_sensitive() {
        let a = Scalar::from(1u64);
        let b = Scalar::from(2u64);
        assert_ne!(compress_native(&[a, b], 0), compress_native(&[b, a], 0));
    }

    #[test]
    fn test_compress_length_sensitive() {
        let zero = Scalar::from(0u64);
        assert_ne!(compress_native(&[], 0), compress_native(&[zero], 0));
        assert_ne!(compress_native(&[zero], 0), compress_native(&[zero, zero], 0));
    }

    #[test]
    fn test_hash_buffer_trailing_zeros() {
        assert_ne!(hash_buffer(&[1, 2, 3], 0), hash_buffer(&[1, 2, 3, 0], 0));
        assert_ne!(hash_buffer(&[], 0), hash_buffer(&[0], 0));
    }

    proptest! {
        #[test]
        fn test_hash_index_separates(values in proptest::collection::vec(any::<u64>(), 0..8),
                                     i1 in 0u32..64, i2 in 0u32..64) {
            prop_assume!(i1 != i2);
            let inputs: Vec<Scalar> = values.into_iter().map(Scalar::from).collect();
            prop_assert_ne!(compress_native(&inputs, i1), compress_native(&inputs, i2));
        }
    }
}
