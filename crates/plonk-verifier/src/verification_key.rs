//! Verification keys
//!
//! [`VerificationKeyData`] is the plain, serializable snapshot; [`VerificationKey`]
//! binds it to a reference string and carries the values derived from it.

use crate::{PolynomialManifest, Result, VerificationKeyError};
use ark_ff::Zero;
use plonk_arith::{CircuitBuilder, CircuitType};
use plonk_field::{
    hash_buffer, scalar_to_hex, Decode, Encode, EvaluationDomain, G1Affine, Reader, Scalar,
    SerializationError, Writer,
};
use plonk_srs::{get_crs_factory, VerifierCrs};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Serializable snapshot of a circuit's verification material.
///
/// Equality compares the circuit type, size, public input count and
/// commitments. The recursive-proof fields are serialized and hashed but do
/// not take part in equality: two snapshots differing only there describe the
/// same key for caching purposes.
#[derive(Debug, Clone)]
pub struct VerificationKeyData {
    pub circuit_type: CircuitType,
    pub circuit_size: u32,
    pub num_public_inputs: u32,
    pub commitments: BTreeMap<String, G1Affine>,
    pub contains_recursive_proof: bool,
    pub recursive_proof_public_input_indices: Vec<u32>,
}

impl VerificationKeyData {
    pub fn new(circuit_type: CircuitType, circuit_size: u32, num_public_inputs: u32) -> Self {
        Self {
            circuit_type,
            circuit_size,
            num_public_inputs,
            commitments: BTreeMap::new(),
            contains_recursive_proof: false,
            recursive_proof_public_input_indices: Vec::new(),
        }
    }

    /// Fingerprint of every field, including the recursive-proof section,
    /// separated by `hash_index`.
    pub fn compress_native(&self, hash_index: u32) -> Scalar {
        let mut preimage = Writer::new();
        preimage.write_u32(self.circuit_type.as_u32());
        preimage.write_u32(self.circuit_size);
        preimage.write_u32(self.num_public_inputs);
        // The domain root binds the size to the field it was derived in.
        let root = EvaluationDomain::new(self.circuit_size as usize)
            .map(|d| d.root())
            .unwrap_or_else(|_| Scalar::zero());
        preimage.write_scalar(&root);
        for (label, commitment) in &self.commitments {
            preimage.write_string(label);
            preimage.write_g1(commitment);
        }
        preimage.write_bool(self.contains_recursive_proof);
        preimage.write(&self.recursive_proof_public_input_indices);
        hash_buffer(&preimage.into_bytes(), hash_index)
    }

    /// Labels this key is missing compared to the manifest of its circuit type
    pub fn missing_commitments(&self) -> Vec<&'static str> {
        PolynomialManifest::new(self.circuit_type)
            .precomputed_commitment_labels()
            .into_iter()
            .filter(|label| !self.commitments.contains_key(*label))
            .collect()
    }

    /// Checks the structural invariants a key must satisfy
    pub fn validate(&self) -> Result<()> {
        let size = self.circuit_size;
        if size == 0 || !size.is_power_of_two() {
            return Err(VerificationKeyError::MalformedKey(format!(
                "circuit size {} is not a power of two",
                size
            )));
        }
        if self.num_public_inputs > size {
            return Err(VerificationKeyError::MalformedKey(format!(
                "{} public inputs exceed circuit size {}",
                self.num_public_inputs, size
            )));
        }
        let known = PolynomialManifest::new(self.circuit_type).precomputed_commitment_labels();
        if let Some(unknown) = self
            .commitments
            .keys()
            .find(|label| !known.contains(label.as_str()))
        {
            return Err(VerificationKeyError::MalformedKey(format!(
                "commitment {} is not part of the {} manifest",
                unknown, self.circuit_type
            )));
        }
        if !self.contains_recursive_proof && !self.recursive_proof_public_input_indices.is_empty() {
            return Err(VerificationKeyError::MalformedKey(
                "recursive proof indices without a recursive proof".to_string(),
            ));
        }
        if let Some(index) = self
            .recursive_proof_public_input_indices
            .iter()
            .find(|&&i| i >= self.num_public_inputs)
        {
            return Err(VerificationKeyError::MalformedKey(format!(
                "recursive proof index {} out of {} public inputs",
                index, self.num_public_inputs
            )));
        }
        Ok(())
    }

    /// [`validate`](Self::validate), and additionally requires every
    /// commitment the manifest lists. Keys still being built may be partial;
    /// keys read back from bytes may not.
    pub fn validate_complete(&self) -> Result<()> {
        self.validate()?;
        let missing = self.missing_commitments();
        if !missing.is_empty() {
            return Err(VerificationKeyError::MalformedKey(format!(
                "missing commitments: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

impl PartialEq for VerificationKeyData {
    fn eq(&self, other: &Self) -> bool {
        self.circuit_type == other.circuit_type
            && self.circuit_size == other.circuit_size
            && self.num_public_inputs == other.num_public_inputs
            && self.commitments == other.commitments
    }
}

impl Eq for VerificationKeyData {}

impl Encode for VerificationKeyData {
    fn encode(&self, writer: &mut Writer) {
        writer.write_u32(self.circuit_type.as_u32());
        writer.write_u32(self.circuit_size);
        writer.write_u32(self.num_public_inputs);
        writer.write(&self.commitments);
        writer.write_bool(self.contains_recursive_proof);
        writer.write(&self.recursive_proof_public_input_indices);
    }
}

impl Decode for VerificationKeyData {
    /// Older buffers stop early: every field after the commitments that is
    /// absent takes its default. A buffer that ends inside a field is
    /// rejected.
    fn decode(reader: &mut Reader<'_>) -> std::result::Result<Self, SerializationError> {
        let circuit_type = CircuitType::try_from(reader.read_u32()?)?;
        let circuit_size = reader.read_u32()?;
        let num_public_inputs = reader.read_u32()?;
        let commitments = reader.read::<BTreeMap<String, G1Affine>>()?;

        let mut data = Self {
            circuit_type,
            circuit_size,
            num_public_inputs,
            commitments,
            contains_recursive_proof: false,
            recursive_proof_public_input_indices: Vec::new(),
        };
        if reader.is_empty() {
            return Ok(data);
        }
        data.contains_recursive_proof = reader.read_bool()?;
        if reader.is_empty() {
            return Ok(data);
        }

        data.recursive_proof_public_input_indices =
            reader.read::<Vec<u32>>().map_err(|e| match e {
                SerializationError::UnexpectedEnd { .. } => {
                    SerializationError::PartialTrailingSection
                }
                other => other,
            })?;
        if !data.contains_recursive_proof && !data.recursive_proof_public_input_indices.is_empty() {
            return Err(SerializationError::InvalidValue(
                "recursive proof indices without a recursive proof".to_string(),
            ));
        }
        Ok(data)
    }
}

impl fmt::Display for VerificationKeyData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "verification_key_data {{")?;
        writeln!(f, "  circuit_type: {}", self.circuit_type)?;
        writeln!(f, "  circuit_size: {}", self.circuit_size)?;
        writeln!(f, "  num_public_inputs: {}", self.num_public_inputs)?;
        writeln!(f, "  commitments: [")?;
        for (label, point) in &self.commitments {
            if point.infinity {
                writeln!(f, "    {}: infinity", label)?;
            } else {
                writeln!(f, "    {}: ({}, {})", label, point.x, point.y)?;
            }
        }
        writeln!(f, "  ]")?;
        writeln!(f, "  contains_recursive_proof: {}", self.contains_recursive_proof)?;
        writeln!(
            f,
            "  recursive_proof_public_input_indices: {:?}",
            self.recursive_proof_public_input_indices
        )?;
        write!(f, "}}")
    }
}

/// A verification key bound to a reference string.
///
/// Clones share the reference string handle.
#[derive(Debug, Clone)]
pub struct VerificationKey {
    data: VerificationKeyData,
    log_circuit_size: u32,
    domain: EvaluationDomain,
    polynomial_manifest: PolynomialManifest,
    /// `z^n` scratch for the verifier's challenge powers; zero until used
    z_pow_n: Scalar,
    reference_string: Arc<VerifierCrs>,
}

impl VerificationKey {
    /// Binds `data` to `reference_string`, deriving the domain and manifest
    pub fn new(data: VerificationKeyData, reference_string: Arc<VerifierCrs>) -> Result<Self> {
        data.validate()?;
        let size = data.circuit_size as usize;
        if !reference_string.supports(size) {
            return Err(VerificationKeyError::InsufficientCrs {
                required: size,
                available: reference_string.num_points(),
            });
        }
        let domain = EvaluationDomain::new(size)
            .map_err(|e| VerificationKeyError::MalformedKey(e.to_string()))?;

        tracing::debug!(
            circuit_type = %data.circuit_type,
            circuit_size = data.circuit_size,
            num_public_inputs = data.num_public_inputs,
            "constructed verification key"
        );
        Ok(Self {
            log_circuit_size: domain.log2_size(),
            domain,
            polynomial_manifest: PolynomialManifest::new(data.circuit_type),
            z_pow_n: Scalar::zero(),
            reference_string,
            data,
        })
    }

    /// Key for a freshly synthesized circuit. The size is `num_gates` rounded
    /// up to a power of two; commitments are filled in later.
    pub fn from_circuit_shape(
        num_gates: usize,
        num_public_inputs: usize,
        reference_string: Arc<VerifierCrs>,
        circuit_type: CircuitType,
    ) -> Result<Self> {
        let circuit_size = u32::try_from(num_gates.max(1).next_power_of_two()).map_err(|_| {
            VerificationKeyError::MalformedKey(format!("{} gates exceed a u32 circuit size", num_gates))
        })?;
        let num_public_inputs = u32::try_from(num_public_inputs).map_err(|_| {
            VerificationKeyError::MalformedKey(format!("{} public inputs", num_public_inputs))
        })?;
        let data = VerificationKeyData::new(circuit_type, circuit_size, num_public_inputs);
        Self::new(data, reference_string)
    }

    /// Key sized for the circuit recorded by `builder`. Public inputs occupy
    /// gates of their own.
    pub fn for_circuit<B: CircuitBuilder>(
        builder: &B,
        reference_string: Arc<VerifierCrs>,
    ) -> Result<Self> {
        let num_public_inputs = builder.num_public_inputs();
        Self::from_circuit_shape(
            builder.num_gates() + num_public_inputs,
            num_public_inputs,
            reference_string,
            builder.circuit_type(),
        )
    }

    /// Decodes a finished key and binds it to the process-wide reference
    /// string. Every manifest commitment must be present.
    pub fn read_from(bytes: &[u8]) -> Result<Self> {
        let data = VerificationKeyData::from_bytes(bytes)?;
        data.validate_complete()?;
        let reference_string = get_crs_factory()?.get_verifier_crs();
        tracing::debug!(len = bytes.len(), "rehydrated verification key");
        Self::new(data, reference_string)
    }

    pub fn as_data(&self) -> VerificationKeyData {
        self.data.clone()
    }

    pub fn data(&self) -> &VerificationKeyData {
        &self.data
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_bytes()
    }

    /// SHA-256 of the serialized data. Independent of the reference string.
    pub fn sha256_hash(&self) -> [u8; 32] {
        Sha256::digest(self.to_bytes()).into()
    }

    pub fn sha256_hex(&self) -> String {
        hex::encode(self.sha256_hash())
    }

    pub fn compress_native(&self, hash_index: u32) -> Scalar {
        self.data.compress_native(hash_index)
    }

    pub fn compress_native_hex(&self, hash_index: u32) -> String {
        scalar_to_hex(&self.compress_native(hash_index))
    }

    pub fn circuit_type(&self) -> CircuitType {
        self.data.circuit_type
    }

    pub fn circuit_size(&self) -> u32 {
        self.data.circuit_size
    }

    pub fn num_public_inputs(&self) -> u32 {
        self.data.num_public_inputs
    }

    pub fn log_circuit_size(&self) -> u32 {
        self.log_circuit_size
    }

    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    pub fn polynomial_manifest(&self) -> &PolynomialManifest {
        &self.polynomial_manifest
    }

    pub fn program_width(&self) -> usize {
        self.data.circuit_type.program_width()
    }

    pub fn z_pow_n(&self) -> Scalar {
        self.z_pow_n
    }

    pub fn set_z_pow_n(&mut self, value: Scalar) {
        self.z_pow_n = value;
    }

    pub fn reference_string(&self) -> &Arc<VerifierCrs> {
        &self.reference_string
    }

    pub fn commitments(&self) -> &BTreeMap<String, G1Affine> {
        &self.data.commitments
    }

    /// Adds a commitment. The label must belong to this key's manifest.
    pub fn insert_commitment(&mut self, label: &str, commitment: G1Affine) -> Result<()> {
        if !self
            .polynomial_manifest
            .precomputed_commitment_labels()
            .contains(label)
        {
            return Err(VerificationKeyError::MalformedKey(format!(
                "commitment {} is not part of the {} manifest",
                label, self.data.circuit_type
            )));
        }
        self.data.commitments.insert(label.to_string(), commitment);
        Ok(())
    }

    /// Marks the public inputs at `indices` as carrying a recursive proof
    pub fn set_recursive_proof(&mut self, indices: Vec<u32>) -> Result<()> {
        if let Some(index) = indices.iter().find(|&&i| i >= self.data.num_public_inputs) {
            return Err(VerificationKeyError::MalformedKey(format!(
                "recursive proof index {} out of {} public inputs",
                index, self.data.num_public_inputs
            )));
        }
        self.data.contains_recursive_proof = true;
        self.data.recursive_proof_public_input_indices = indices;
        Ok(())
    }
}

impl PartialEq for VerificationKey {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for VerificationKey {}

impl fmt::Display for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ec::{CurveGroup, Group};
    use plonk_arith::StandardCircuitBuilder;
    use plonk_srs::{init_crs_factory, CrsFactory, MemCrsFactory};
    use proptest::prelude::*;

    fn point(k: u64) -> G1Affine {
        (ark_bn254::G1Projective::generator() * Scalar::from(k)).into_affine()
    }

    fn crs(num_points: usize) -> Arc<VerifierCrs> {
        MemCrsFactory::from_seed(num_points, 1).get_verifier_crs()
    }

    fn sample_data() -> VerificationKeyData {
        let mut data = VerificationKeyData::new(CircuitType::Standard, 1024, 2);
        data.commitments.insert("Q1".to_string(), point(1));
        data.commitments.insert("Q2".to_string(), point(2));
        data
    }

    fn full_standard_data() -> VerificationKeyData {
        let mut data = VerificationKeyData::new(CircuitType::Standard, 16, 1);
        for (k, label) in PolynomialManifest::new(CircuitType::Standard)
            .precomputed_commitment_labels()
            .into_iter()
            .enumerate()
        {
            data.commitments.insert(label.to_string(), point(k as u64 + 1));
        }
        data
    }

    #[test]
    fn test_data_round_trip_and_key_equality() {
        let data = sample_data();
        let bytes = data.to_bytes();
        let decoded = VerificationKeyData::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.to_bytes(), bytes);

        let reference = crs(2048);
        let a = VerificationKey::new(data, reference.clone()).unwrap();
        let b = VerificationKey::new(decoded, reference).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shape_rounds_up_to_power_of_two() {
        let key = VerificationKey::from_circuit_shape(900, 2, crs(2048), CircuitType::Standard)
            .unwrap();
        assert_eq!(key.circuit_size(), 1024);
        assert_eq!(key.log_circuit_size(), 10);
        assert_eq!(key.domain().size(), 1024);
        assert_eq!(key.program_width(), 3);
        assert!(key.z_pow_n().is_zero());
    }

    #[test]
    fn test_non_power_of_two_is_malformed() {
        let data = VerificationKeyData::new(CircuitType::Standard, 1000, 0);
        assert!(matches!(
            VerificationKey::new(data, crs(2048)),
            Err(VerificationKeyError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_too_many_public_inputs_is_malformed() {
        let data = VerificationKeyData::new(CircuitType::Standard, 4, 5);
        assert!(matches!(
            VerificationKey::new(data, crs(16)),
            Err(VerificationKeyError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_unknown_commitment_is_malformed() {
        let mut data = VerificationKeyData::new(CircuitType::Standard, 16, 0);
        data.commitments.insert("Q5".to_string(), point(1));
        assert!(matches!(
            VerificationKey::new(data, crs(16)),
            Err(VerificationKeyError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_insufficient_crs() {
        let data = VerificationKeyData::new(CircuitType::Turbo, 64, 0);
        assert_eq!(
            VerificationKey::new(data, crs(32)),
            Err(VerificationKeyError::InsufficientCrs {
                required: 64,
                available: 32
            })
        );
    }

    #[test]
    fn test_sha256_ignores_reference_string() {
        let data = full_standard_data();
        let a = VerificationKey::new(data.clone(), crs(64)).unwrap();
        let b = VerificationKey::new(data, MemCrsFactory::from_seed(128, 99).get_verifier_crs())
            .unwrap();
        assert!(!Arc::ptr_eq(a.reference_string(), b.reference_string()));
        assert_eq!(a.sha256_hash(), b.sha256_hash());
        assert_eq!(a.sha256_hex().len(), 64);
    }

    #[test]
    fn test_clone_shares_reference_string() {
        let key = VerificationKey::new(full_standard_data(), crs(64)).unwrap();
        let copy = key.clone();
        assert!(Arc::ptr_eq(key.reference_string(), copy.reference_string()));
        assert_eq!(Arc::strong_count(key.reference_string()), 2);
        drop(copy);
        assert_eq!(Arc::strong_count(key.reference_string()), 1);
    }

    #[test]
    fn test_equality_ignores_recursive_fields() {
        let plain = full_standard_data();
        let mut recursive = plain.clone();
        recursive.contains_recursive_proof = true;
        recursive.recursive_proof_public_input_indices = vec![0];
        assert_eq!(plain, recursive);
        assert_ne!(plain.to_bytes(), recursive.to_bytes());
        assert_ne!(plain.compress_native(0), recursive.compress_native(0));
    }

    #[test]
    fn test_compress_binds_commitment_labels() {
        let mut a = VerificationKeyData::new(CircuitType::Standard, 16, 0);
        let mut b = a.clone();
        a.commitments.insert("Q1".to_string(), point(7));
        b.commitments.insert("QM".to_string(), point(7));
        a.validate().unwrap();
        b.validate().unwrap();
        assert_ne!(a, b);
        assert_ne!(a.compress_native(0), b.compress_native(0));
    }

    #[test]
    fn test_read_from_requires_every_commitment() {
        let _ = init_crs_factory(Arc::new(MemCrsFactory::from_seed(2048, 1)));

        let full = full_standard_data();
        let key = VerificationKey::read_from(&full.to_bytes()).unwrap();
        assert_eq!(key.as_data(), full);

        let partial = sample_data();
        partial.validate().unwrap();
        assert!(matches!(
            VerificationKey::read_from(&partial.to_bytes()),
            Err(VerificationKeyError::MalformedKey(_))
        ));
    }

    #[test]
    fn test_compress_separates_hash_index() {
        let data = full_standard_data();
        assert_eq!(data.compress_native(3), data.compress_native(3));
        assert_ne!(data.compress_native(3), data.compress_native(4));
    }

    #[test]
    fn test_legacy_buffer_without_recursive_section() {
        let data = sample_data();
        let bytes = data.to_bytes();
        // bool plus an empty index vector
        let legacy = &bytes[..bytes.len() - 5];
        let decoded = VerificationKeyData::from_bytes(legacy).unwrap();
        assert!(!decoded.contains_recursive_proof);
        assert!(decoded.recursive_proof_public_input_indices.is_empty());
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_missing_index_list_defaults_to_empty() {
        let mut data = sample_data();
        data.contains_recursive_proof = true;
        let bytes = data.to_bytes();
        // drop the empty index vector's count
        let decoded = VerificationKeyData::from_bytes(&bytes[..bytes.len() - 4]).unwrap();
        assert!(decoded.contains_recursive_proof);
        assert!(decoded.recursive_proof_public_input_indices.is_empty());
    }

    #[test]
    fn test_cut_inside_index_list_rejected() {
        let mut data = sample_data();
        data.contains_recursive_proof = true;
        data.recursive_proof_public_input_indices = vec![0, 1];
        let bytes = data.to_bytes();
        // trailing section: 1 flag byte, 4 count bytes, 8 index bytes
        for cut in 1..=11 {
            assert_eq!(
                VerificationKeyData::from_bytes(&bytes[..bytes.len() - cut]),
                Err(SerializationError::PartialTrailingSection),
                "cut {}",
                cut
            );
        }
        let flag_only = VerificationKeyData::from_bytes(&bytes[..bytes.len() - 12]).unwrap();
        assert!(flag_only.contains_recursive_proof);
        assert!(flag_only.recursive_proof_public_input_indices.is_empty());
        let legacy = VerificationKeyData::from_bytes(&bytes[..bytes.len() - 13]).unwrap();
        assert!(!legacy.contains_recursive_proof);
    }

    #[test]
    fn test_indices_require_recursive_flag() {
        let mut data = sample_data();
        data.recursive_proof_public_input_indices = vec![1];
        assert!(matches!(
            VerificationKeyData::from_bytes(&data.to_bytes()),
            Err(SerializationError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_unknown_circuit_type_rejected() {
        let mut bytes = sample_data().to_bytes();
        bytes[3] = 7;
        assert_eq!(
            VerificationKeyData::from_bytes(&bytes),
            Err(SerializationError::UnknownCircuitType(7))
        );
    }

    #[test]
    fn test_for_circuit_counts_public_inputs() {
        let mut builder = StandardCircuitBuilder::new();
        let a = builder.add_variable(Scalar::from(2u64));
        let b = builder.add_variable(Scalar::from(3u64));
        let c = builder.add_multiplication_gate(a, b).unwrap();
        builder.set_public_input(c).unwrap();

        let key = VerificationKey::for_circuit(&builder, crs(16)).unwrap();
        assert_eq!(key.circuit_size(), 2);
        assert_eq!(key.num_public_inputs(), 1);
        assert_eq!(key.circuit_type(), CircuitType::Standard);
    }

    #[test]
    fn test_insert_commitment_checks_manifest() {
        let mut key =
            VerificationKey::from_circuit_shape(8, 0, crs(16), CircuitType::Standard).unwrap();
        key.insert_commitment("QM", point(3)).unwrap();
        assert!(key.insert_commitment("W1", point(3)).is_err());
        assert_eq!(key.as_data().missing_commitments().len(), 7);
    }

    #[test]
    fn test_recursive_indices_bounded_by_public_inputs() {
        let mut key =
            VerificationKey::from_circuit_shape(8, 2, crs(16), CircuitType::Standard).unwrap();
        assert!(key.set_recursive_proof(vec![2]).is_err());
        key.set_recursive_proof(vec![0, 1]).unwrap();
        assert!(key.data().contains_recursive_proof);
    }

    #[test]
    fn test_display_lists_commitments() {
        let text = sample_data().to_string();
        assert!(text.contains("circuit_size: 1024"));
        assert!(text.contains("Q1:"));
    }

    proptest! {
        #[test]
        fn test_log_circuit_size_matches(log2 in 0u32..16) {
            let size = 1u32 << log2;
            let data = VerificationKeyData::new(CircuitType::Ultra, size, 0);
            let key = VerificationKey::new(data, crs(1 << 16)).unwrap();
            prop_assert_eq!(key.log_circuit_size(), log2);
        }

        #[test]
        fn test_data_round_trip(size_log in 0u32..20, npi in 0u32..8, ks in proptest::collection::vec(1u64..1000, 0..5),
                                recursive in any::<bool>()) {
            let mut data = VerificationKeyData::new(CircuitType::Standard, 1 << size_log, npi);
            let labels = ["Q1", "Q2", "Q3", "QM", "QC"];
            for (label, k) in labels.iter().zip(ks) {
                data.commitments.insert(label.to_string(), point(k));
            }
            if recursive {
                data.contains_recursive_proof = true;
                data.recursive_proof_public_input_indices = (0..npi).collect();
            }
            let decoded = VerificationKeyData::from_bytes(&data.to_bytes()).unwrap();
            prop_assert_eq!(&decoded, &data);
            prop_assert_eq!(decoded.contains_recursive_proof, recursive);
            prop_assert_eq!(decoded.recursive_proof_public_input_indices, data.recursive_proof_public_input_indices);
        }
    }
}
