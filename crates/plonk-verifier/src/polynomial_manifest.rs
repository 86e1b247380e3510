//! Polynomials a proof of each arithmetization commits to

use plonk_arith::CircuitType;
use std::collections::BTreeSet;

/// Where a polynomial comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolynomialSource {
    /// Committed by the prover per proof
    Witness,
    /// Fixed gate selector, committed in the verification key
    Selector,
    /// Copy-constraint permutation, committed in the verification key
    Permutation,
    /// Other fixed data (lookup tables), committed in the verification key
    Other,
}

impl PolynomialSource {
    /// Whether the commitment lives in the verification key
    pub fn is_precomputed(&self) -> bool {
        !matches!(self, PolynomialSource::Witness)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialDescriptor {
    pub polynomial_label: &'static str,
    pub commitment_label: &'static str,
    pub source: PolynomialSource,
    /// Opened at `z * omega` as well as `z`
    pub requires_shifted_evaluation: bool,
}

const fn entry(
    polynomial_label: &'static str,
    commitment_label: &'static str,
    source: PolynomialSource,
    requires_shifted_evaluation: bool,
) -> PolynomialDescriptor {
    PolynomialDescriptor {
        polynomial_label,
        commitment_label,
        source,
        requires_shifted_evaluation,
    }
}

use self::PolynomialSource::{Other, Permutation, Selector, Witness};

const STANDARD_MANIFEST: &[PolynomialDescriptor] = &[
    entry("w_1", "W1", Witness, false),
    entry("w_2", "W2", Witness, false),
    entry("w_3", "W3", Witness, false),
    entry("z_perm", "Z", Witness, true),
    entry("q_1", "Q1", Selector, false),
    entry("q_2", "Q2", Selector, false),
    entry("q_3", "Q3", Selector, false),
    entry("q_m", "QM", Selector, false),
    entry("q_c", "QC", Selector, false),
    entry("sigma_1", "SIGMA1", Permutation, false),
    entry("sigma_2", "SIGMA2", Permutation, false),
    entry("sigma_3", "SIGMA3", Permutation, false),
];

const TURBO_MANIFEST: &[PolynomialDescriptor] = &[
    entry("w_1", "W1", Witness, true),
    entry("w_2", "W2", Witness, true),
    entry("w_3", "W3", Witness, true),
    entry("w_4", "W4", Witness, true),
    entry("z_perm", "Z", Witness, true),
    entry("q_1", "Q1", Selector, false),
    entry("q_2", "Q2", Selector, false),
    entry("q_3", "Q3", Selector, false),
    entry("q_4", "Q4", Selector, false),
    entry("q_5", "Q5", Selector, false),
    entry("q_m", "QM", Selector, false),
    entry("q_c", "QC", Selector, false),
    entry("q_arith", "QARITH", Selector, false),
    entry("q_fixed_base", "QFIXED", Selector, false),
    entry("q_range", "QRANGE", Selector, false),
    entry("q_logic", "QLOGIC", Selector, false),
    entry("sigma_1", "SIGMA1", Permutation, false),
    entry("sigma_2", "SIGMA2", Permutation, false),
    entry("sigma_3", "SIGMA3", Permutation, false),
    entry("sigma_4", "SIGMA4", Permutation, false),
];

const ULTRA_MANIFEST: &[PolynomialDescriptor] = &[
    entry("w_1", "W1", Witness, true),
    entry("w_2", "W2", Witness, true),
    entry("w_3", "W3", Witness, true),
    entry("w_4", "W4", Witness, true),
    entry("s", "S", Witness, true),
    entry("z_perm", "Z", Witness, true),
    entry("z_lookup", "Z_LOOKUP", Witness, true),
    entry("q_1", "Q1", Selector, false),
    entry("q_2", "Q2", Selector, false),
    entry("q_3", "Q3", Selector, false),
    entry("q_4", "Q4", Selector, false),
    entry("q_m", "QM", Selector, false),
    entry("q_c", "QC", Selector, false),
    entry("q_arith", "QARITH", Selector, false),
    entry("q_sort", "QSORT", Selector, false),
    entry("q_elliptic", "QELLIPTIC", Selector, false),
    entry("q_aux", "QAUX", Selector, false),
    entry("table_type", "TABLE_TYPE", Selector, false),
    entry("sigma_1", "SIGMA1", Permutation, false),
    entry("sigma_2", "SIGMA2", Permutation, false),
    entry("sigma_3", "SIGMA3", Permutation, false),
    entry("sigma_4", "SIGMA4", Permutation, false),
    entry("id_1", "ID1", Permutation, false),
    entry("id_2", "ID2", Permutation, false),
    entry("id_3", "ID3", Permutation, false),
    entry("id_4", "ID4", Permutation, false),
    entry("table_value_1", "TABLE1", Other, true),
    entry("table_value_2", "TABLE2", Other, true),
    entry("table_value_3", "TABLE3", Other, true),
    entry("table_value_4", "TABLE4", Other, true),
];

/// Ordered list of the polynomials of one arithmetization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialManifest {
    circuit_type: CircuitType,
    entries: &'static [PolynomialDescriptor],
}

impl PolynomialManifest {
    pub fn new(circuit_type: CircuitType) -> Self {
        let entries = match circuit_type {
            CircuitType::Standard => STANDARD_MANIFEST,
            CircuitType::Turbo => TURBO_MANIFEST,
            CircuitType::Ultra => ULTRA_MANIFEST,
        };
        Self {
            circuit_type,
            entries,
        }
    }

    pub fn circuit_type(&self) -> CircuitType {
        self.circuit_type
    }

    pub fn entries(&self) -> &[PolynomialDescriptor] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, polynomial_label: &str) -> Option<&PolynomialDescriptor> {
        self.entries
            .iter()
            .find(|e| e.polynomial_label == polynomial_label)
    }

    /// Commitment labels a verification key carries
    pub fn precomputed_commitment_labels(&self) -> BTreeSet<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.source.is_precomputed())
            .map(|e| e.commitment_label)
            .collect()
    }
}
