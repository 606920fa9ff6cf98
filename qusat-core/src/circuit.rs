//! Quantum circuit representation

use crate::gate::{CliffordOp, GateOp, OpType};
use crate::{CircuitError, QubitId, Result};

/// A quantum circuit: an ordered list of gate operations on a fixed register
///
/// # Example
/// ```
/// use qusat_core::Circuit;
///
/// let mut circuit = Circuit::new(2);
/// circuit.h(0).unwrap().cx(0, 1).unwrap();
/// assert_eq!(circuit.len(), 2);
/// assert!(circuit.is_clifford());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        Self::with_capacity(num_qubits, 0)
    }

    /// Create a circuit with pre-allocated capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Append a gate operation
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds
    pub fn push(&mut self, op: GateOp) -> Result<&mut Self> {
        if let Some(qubit) = op.qubits().find(|q| !q.is_within(self.num_qubits)) {
            return Err(CircuitError::invalid_qubit(qubit.index(), self.num_qubits));
        }
        self.operations.push(op);
        Ok(self)
    }

    fn single(&mut self, op_type: OpType, target: usize) -> Result<&mut Self> {
        self.push(GateOp::new(op_type, QubitId::new(target)))
    }

    pub fn id(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::I, target)
    }

    pub fn h(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::H, target)
    }

    pub fn s(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::S, target)
    }

    pub fn sdg(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::Sdg, target)
    }

    pub fn x(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::X, target)
    }

    pub fn y(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::Y, target)
    }

    pub fn z(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::Z, target)
    }

    pub fn t(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::T, target)
    }

    pub fn tdg(&mut self, target: usize) -> Result<&mut Self> {
        self.single(OpType::Tdg, target)
    }

    /// Append a CNOT
    pub fn cx(&mut self, control: usize, target: usize) -> Result<&mut Self> {
        self.mcx(&[control], target)
    }

    /// Append a multi-controlled X
    pub fn mcx(&mut self, controls: &[usize], target: usize) -> Result<&mut Self> {
        let controls: Vec<QubitId> = controls.iter().copied().map(QubitId::new).collect();
        let op = GateOp::controlled(OpType::X, &controls, QubitId::new(target))?;
        self.push(op)
    }

    /// Remove and return the operation at `index`
    pub fn remove(&mut self, index: usize) -> Result<GateOp> {
        if index >= self.operations.len() {
            return Err(CircuitError::OperationOutOfRange {
                index,
                len: self.operations.len(),
            });
        }
        Ok(self.operations.remove(index))
    }

    /// Iterate over the operations in program order
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Whether every operation belongs to the supported Clifford set
    ///
    /// Gates with more than one control, or a control on anything but X, are
    /// rejected here rather than mishandled during simulation.
    pub fn is_clifford(&self) -> bool {
        self.operations
            .iter()
            .all(|op| CliffordOp::try_from(op).is_ok())
    }

    /// Convert every operation into its [`CliffordOp`]
    ///
    /// # Errors
    /// Returns [`CircuitError::NonClifford`] for the first unsupported gate.
    pub fn clifford_ops(&self) -> Result<Vec<CliffordOp>> {
        self.operations
            .iter()
            .enumerate()
            .map(|(i, op)| CliffordOp::try_from(op).map_err(|gate| CircuitError::non_clifford(i, gate)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_zero_qubit_circuit_panics() {
        let _ = Circuit::new(0);
    }

    #[test]
    fn test_builder_chain() {
        let mut circuit = Circuit::new(2);
        circuit.h(0).unwrap().s(1).unwrap().cx(1, 0).unwrap();
        let names: Vec<String> = circuit.operations().map(|op| op.to_string()).collect();
        assert_eq!(names, vec!["h(q0)", "s(q1)", "cx(q1, q0)"]);
    }

    #[test]
    fn test_out_of_range_qubit() {
        let mut circuit = Circuit::new(2);
        assert_eq!(circuit.h(2).unwrap_err(), CircuitError::InvalidQubit(2, 2));
        assert!(circuit.cx(0, 5).is_err());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_remove() {
        let mut circuit = Circuit::new(1);
        circuit.h(0).unwrap().z(0).unwrap();
        let removed = circuit.remove(0).unwrap();
        assert_eq!(removed.op_type(), OpType::H);
        assert_eq!(circuit.len(), 1);
        assert!(matches!(
            circuit.remove(4),
            Err(CircuitError::OperationOutOfRange { index: 4, len: 1 })
        ));
    }

    #[test]
    fn test_is_clifford() {
        let mut circuit = Circuit::new(3);
        circuit.h(0).unwrap().sdg(1).unwrap().y(2).unwrap().id(0).unwrap();
        assert!(circuit.is_clifford());

        circuit.t(1).unwrap();
        assert!(!circuit.is_clifford());
        assert_eq!(
            circuit.clifford_ops().unwrap_err(),
            CircuitError::non_clifford(4, "t(q1)")
        );
    }

    #[test]
    fn test_multi_controlled_is_rejected() {
        let mut circuit = Circuit::new(3);
        circuit.mcx(&[0, 1], 2).unwrap();
        assert!(!circuit.is_clifford());
    }
}
