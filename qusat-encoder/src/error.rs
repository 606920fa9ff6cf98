//! Error types for the encoder

use qusat_core::CircuitError;
use thiserror::Error;

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, EncoderError>;

/// Reasons an equivalence or satisfiability check is refused or aborted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncoderError {
    /// A gate outside the supported Clifford set is present
    #[error("Circuit is not a Clifford circuit: {0}")]
    NonCliffordGate(#[source] CircuitError),

    /// An equivalence check was given a circuit without gates
    #[error("Both circuits must be non-empty")]
    EmptyCircuit,

    /// The two circuits of an equivalence check act on different registers
    #[error("Circuits act on {0} and {1} qubits")]
    QubitCountMismatch(usize, usize),

    /// No generator was ever recorded, so there is nothing to encode
    #[error("Zero generators computed")]
    DegenerateEncoding,

    /// The constraint set or the backend rejected the instance
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors raised by the bit-vector front end or a solver backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Operands of a comparison have different widths
    #[error("Bit-vector width mismatch: {left} vs {right}")]
    WidthMismatch { left: u32, right: u32 },

    /// Declared width outside `1..=64`
    #[error("Unsupported bit-vector width {0}")]
    InvalidWidth(u32),

    /// A term references a variable not declared in this constraint set
    #[error("Undeclared bit-vector variable #{0}")]
    UndeclaredVariable(usize),

    /// The backend failed while solving
    #[error("Solver backend '{backend}' failed: {message}")]
    Backend { backend: String, message: String },
}

impl SolverError {
    pub fn backend(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            backend: backend.into(),
            message: message.into(),
        }
    }
}

impl From<CircuitError> for EncoderError {
    fn from(err: CircuitError) -> Self {
        EncoderError::NonCliffordGate(err)
    }
}
