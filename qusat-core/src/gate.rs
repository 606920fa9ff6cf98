//! Gate operations and the closed Clifford operation set
//!
//! A [`GateOp`] is what a circuit stores: a type tag, one target qubit and any
//! number of control qubits. Simulation only ever sees [`CliffordOp`], the
//! closed set of operations the stabilizer tableau can apply. Conversion
//! between the two is where unsupported gates are rejected.

use crate::{CircuitError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;

/// Gate type tag
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpType {
    /// Identity
    I,
    /// Hadamard
    H,
    /// Pauli-X (CNOT when controlled once)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z
    Z,
    /// Phase gate, sqrt(Z)
    S,
    /// Inverse phase gate
    Sdg,
    /// pi/8 gate
    T,
    /// Inverse pi/8 gate
    Tdg,
}

impl OpType {
    /// Lowercase mnemonic of the gate type
    pub const fn name(&self) -> &'static str {
        match self {
            OpType::I => "id",
            OpType::H => "h",
            OpType::X => "x",
            OpType::Y => "y",
            OpType::Z => "z",
            OpType::S => "s",
            OpType::Sdg => "sdg",
            OpType::T => "t",
            OpType::Tdg => "tdg",
        }
    }

    /// Whether the uncontrolled gate belongs to the supported Clifford set
    pub const fn is_clifford(&self) -> bool {
        !matches!(self, OpType::T | OpType::Tdg)
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate applied to concrete qubits
///
/// # Example
/// ```
/// use qusat_core::{GateOp, OpType, QubitId};
///
/// let cx = GateOp::controlled(OpType::X, &[QubitId::new(0)], QubitId::new(1)).unwrap();
/// assert!(cx.is_controlled());
/// assert_eq!(cx.to_string(), "cx(q0, q1)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GateOp {
    op_type: OpType,
    target: QubitId,
    controls: SmallVec<[QubitId; 1]>,
}

impl GateOp {
    /// Create an uncontrolled gate operation
    pub fn new(op_type: OpType, target: QubitId) -> Self {
        Self {
            op_type,
            target,
            controls: SmallVec::new(),
        }
    }

    /// Create a controlled gate operation
    ///
    /// # Errors
    /// Returns [`CircuitError::DuplicateQubit`] if a qubit is used twice.
    pub fn controlled(op_type: OpType, controls: &[QubitId], target: QubitId) -> Result<Self> {
        for (i, &control) in controls.iter().enumerate() {
            if control == target || controls[..i].contains(&control) {
                return Err(CircuitError::DuplicateQubit(control));
            }
        }

        Ok(Self {
            op_type,
            target,
            controls: SmallVec::from_slice(controls),
        })
    }

    #[inline]
    pub fn op_type(&self) -> OpType {
        self.op_type
    }

    #[inline]
    pub fn target(&self) -> QubitId {
        self.target
    }

    #[inline]
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    #[inline]
    pub fn is_controlled(&self) -> bool {
        !self.controls.is_empty()
    }

    /// All qubits touched by this operation, controls first
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().copied().chain(std::iter::once(self.target))
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in &self.controls {
            write!(f, "c")?;
        }
        write!(f, "{}(", self.op_type)?;
        for q in &self.controls {
            write!(f, "{}, ", q)?;
        }
        write!(f, "{})", self.target)
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The closed set of operations a stabilizer tableau simulates
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CliffordOp {
    I(usize),
    H(usize),
    S(usize),
    Sdg(usize),
    X(usize),
    Y(usize),
    Z(usize),
    Cnot { control: usize, target: usize },
}

impl CliffordOp {
    /// Qubit lane on which the operation is applied during level sweeps.
    ///
    /// A CNOT is scheduled in both its control and target lane; it is applied
    /// only from the control lane.
    pub fn anchor(&self) -> usize {
        match *self {
            CliffordOp::I(q)
            | CliffordOp::H(q)
            | CliffordOp::S(q)
            | CliffordOp::Sdg(q)
            | CliffordOp::X(q)
            | CliffordOp::Y(q)
            | CliffordOp::Z(q) => q,
            CliffordOp::Cnot { control, .. } => control,
        }
    }
}

impl TryFrom<&GateOp> for CliffordOp {
    type Error = String;

    /// Fails with a description of the offending gate.
    fn try_from(op: &GateOp) -> std::result::Result<Self, Self::Error> {
        let target = op.target().index();
        match (op.op_type(), op.controls()) {
            (OpType::I, []) => Ok(CliffordOp::I(target)),
            (OpType::H, []) => Ok(CliffordOp::H(target)),
            (OpType::S, []) => Ok(CliffordOp::S(target)),
            (OpType::Sdg, []) => Ok(CliffordOp::Sdg(target)),
            (OpType::X, []) => Ok(CliffordOp::X(target)),
            (OpType::Y, []) => Ok(CliffordOp::Y(target)),
            (OpType::Z, []) => Ok(CliffordOp::Z(target)),
            (OpType::X, [control]) => Ok(CliffordOp::Cnot {
                control: control.index(),
                target,
            }),
            _ => Err(op.to_string()),
        }
    }
}
