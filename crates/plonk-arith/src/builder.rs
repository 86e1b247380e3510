//! Circuit builders
//!
//! A builder owns the witness table of one circuit, the list of witnesses
//! exposed as public inputs and the gates recorded so far. Circuit-side values
//! ([`crate::FieldT`]) refer back to their builder by [`BuilderId`].

use crate::{BuilderError, CircuitType, Result};
use ark_ff::{One, Zero};
use plonk_field::{compress_native, Scalar};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BUILDER_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a builder instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuilderId(u64);

impl BuilderId {
    pub(crate) fn fresh() -> Self {
        BuilderId(NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for BuilderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "builder#{}", self.0)
    }
}

/// Interface the record layer needs from a circuit builder
pub trait CircuitBuilder {
    fn id(&self) -> BuilderId;

    fn circuit_type(&self) -> CircuitType;

    /// Appends a witness and returns its index
    fn add_variable(&mut self, value: Scalar) -> u32;

    fn get_variable(&self, index: u32) -> Result<Scalar>;

    fn num_variables(&self) -> usize;

    /// Marks a witness as public. Fails for unknown or already-public indices.
    fn set_public_input(&mut self, index: u32) -> Result<()>;

    fn is_public_input(&self, index: u32) -> bool;

    /// Public witnesses in the order they were exposed
    fn public_inputs(&self) -> &[u32];

    fn num_public_inputs(&self) -> usize {
        self.public_inputs().len()
    }

    fn num_gates(&self) -> usize;

    /// Records that `output` is the compression of `inputs` under `hash_index`
    fn create_compress_gate(&mut self, inputs: &[u32], output: u32, hash_index: u32);

    /// Flags the circuit as unsatisfiable. The first message is kept.
    fn failure(&mut self, msg: String);

    fn failed(&self) -> bool;

    fn err(&self) -> Option<&str>;
}

/// Gate constraint over three witnesses
/// Represents: q_m * a * b + q_l * a + q_r * b + q_o * c + q_c = 0
#[derive(Debug, Clone, PartialEq)]
pub struct GateConstraint {
    pub q_m: Scalar,
    pub q_l: Scalar,
    pub q_r: Scalar,
    pub q_o: Scalar,
    pub q_c: Scalar,
}

impl GateConstraint {
    pub fn new(q_m: Scalar, q_l: Scalar, q_r: Scalar, q_o: Scalar, q_c: Scalar) -> Self {
        Self {
            q_m,
            q_l,
            q_r,
            q_o,
            q_c,
        }
    }

    /// a + b - c = 0
    pub fn addition() -> Self {
        Self::new(
            Scalar::zero(),
            Scalar::one(),
            Scalar::one(),
            -Scalar::one(),
            Scalar::zero(),
        )
    }

    /// a * b - c = 0
    pub fn multiplication() -> Self {
        Self::new(
            Scalar::one(),
            Scalar::zero(),
            Scalar::zero(),
            -Scalar::one(),
            Scalar::zero(),
        )
    }

    pub fn evaluate(&self, a: Scalar, b: Scalar, c: Scalar) -> Scalar {
        self.q_m * a * b + self.q_l * a + self.q_r * b + self.q_o * c + self.q_c
    }
}

/// A recorded gate
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Arithmetic {
        wires: [u32; 3],
        constraint: GateConstraint,
    },
    Compress {
        inputs: Vec<u32>,
        output: u32,
        hash_index: u32,
    },
}

/// Builder for the standard (width-3) arithmetization
#[derive(Debug)]
pub struct StandardCircuitBuilder {
    id: BuilderId,
    variables: Vec<Scalar>,
    public_inputs: Vec<u32>,
    public_set: HashSet<u32>,
    gates: Vec<Gate>,
    failure_msg: Option<String>,
}

impl StandardCircuitBuilder {
    pub fn new() -> Self {
        Self {
            id: BuilderId::fresh(),
            variables: Vec::new(),
            public_inputs: Vec::new(),
            public_set: HashSet::new(),
            gates: Vec::new(),
            failure_msg: None,
        }
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Adds `a + b = c` and returns the index of `c`
    pub fn add_addition_gate(&mut self, a: u32, b: u32) -> Result<u32> {
        let sum = self.get_variable(a)? + self.get_variable(b)?;
        let c = self.add_variable(sum);
        self.gates.push(Gate::Arithmetic {
            wires: [a, b, c],
            constraint: GateConstraint::addition(),
        });
        Ok(c)
    }

    /// Adds `a * b = c` and returns the index of `c`
    pub fn add_multiplication_gate(&mut self, a: u32, b: u32) -> Result<u32> {
        let product = self.get_variable(a)? * self.get_variable(b)?;
        let c = self.add_variable(product);
        self.gates.push(Gate::Arithmetic {
            wires: [a, b, c],
            constraint: GateConstraint::multiplication(),
        });
        Ok(c)
    }

    /// Re-evaluates every gate against the witness table
    pub fn check_circuit(&self) -> Result<()> {
        if let Some(msg) = &self.failure_msg {
            return Err(BuilderError::Failed(msg.clone()));
        }

        for (row, gate) in self.gates.iter().enumerate() {
            match gate {
                Gate::Arithmetic { wires, constraint } => {
                    let [a, b, c] = *wires;
                    let result = constraint.evaluate(
                        self.get_variable(a)?,
                        self.get_variable(b)?,
                        self.get_variable(c)?,
                    );
                    if !result.is_zero() {
                        return Err(BuilderError::ConstraintViolation {
                            row,
                            constraint: "arithmetic gate does not vanish".to_string(),
                        });
                    }
                }
                Gate::Compress {
                    inputs,
                    output,
                    hash_index,
                } => {
                    let values = inputs
                        .iter()
                        .map(|&i| self.get_variable(i))
                        .collect::<Result<Vec<_>>>()?;
                    if compress_native(&values, *hash_index) != self.get_variable(*output)? {
                        return Err(BuilderError::ConstraintViolation {
                            row,
                            constraint: format!("compression under index {}", hash_index),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if (index as usize) < self.variables.len() {
            Ok(())
        } else {
            Err(BuilderError::InvalidWitnessIndex {
                index,
                max: self.variables.len(),
            })
        }
    }
}

impl Default for StandardCircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitBuilder for StandardCircuitBuilder {
    fn id(&self) -> BuilderId {
        self.id
    }

    fn circuit_type(&self) -> CircuitType {
        CircuitType::Standard
    }

    fn add_variable(&mut self, value: Scalar) -> u32 {
        self.variables.push(value);
        (self.variables.len() - 1) as u32
    }

    fn get_variable(&self, index: u32) -> Result<Scalar> {
        self.check_index(index)?;
        Ok(self.variables[index as usize])
    }

    fn num_variables(&self) -> usize {
        self.variables.len()
    }

    fn set_public_input(&mut self, index: u32) -> Result<()> {
        self.check_index(index)?;
        if !self.public_set.insert(index) {
            return Err(BuilderError::AlreadyPublic(index));
        }
        self.public_inputs.push(index);
        Ok(())
    }

    fn is_public_input(&self, index: u32) -> bool {
        self.public_set.contains(&index)
    }

    fn public_inputs(&self) -> &[u32] {
        &self.public_inputs
    }

    fn num_gates(&self) -> usize {
        self.gates.len()
    }

    fn create_compress_gate(&mut self, inputs: &[u32], output: u32, hash_index: u32) {
        if let Some(&bad) = inputs
            .iter()
            .chain(std::iter::once(&output))
            .find(|&&i| self.check_index(i).is_err())
        {
            self.failure(format!("compress gate references unknown witness {}", bad));
            return;
        }
        self.gates.push(Gate::Compress {
            inputs: inputs.to_vec(),
            output,
            hash_index,
        });
    }

    fn failure(&mut self, msg: String) {
        tracing::warn!(builder = %self.id, "circuit failure: {}", msg);
        if self.failure_msg.is_none() {
            self.failure_msg = Some(msg);
        }
    }

    fn failed(&self) -> bool {
        self.failure_msg.is_some()
    }

    fn err(&self) -> Option<&str> {
        self.failure_msg.as_deref()
    }
}
