//! Error types for the circuit IR

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// The same qubit appears as control and target (or twice as control)
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Operation index outside the circuit
    #[error("Operation index {index} out of range for circuit with {len} operations")]
    OperationOutOfRange { index: usize, len: usize },

    /// Gate outside the supported Clifford set
    #[error("Operation {index} ({gate}) is not a supported Clifford gate")]
    NonClifford { index: usize, gate: String },
}

impl CircuitError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create a non-Clifford error for the operation at `index`
    pub fn non_clifford(index: usize, gate: impl Into<String>) -> Self {
        Self::NonClifford {
            index,
            gate: gate.into(),
        }
    }
}
