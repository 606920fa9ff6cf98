//! Per-qubit lane schedule of a circuit
//!
//! Operations are layered as soon as possible: an operation lands on the
//! first level after the last operation on any of its qubits. A multi-qubit
//! operation occupies the same level in every lane it touches, and lanes are
//! padded with empty slots up to that level.

use crate::{Circuit, GateOp};

/// Level-indexed lanes over the operations of a borrowed circuit
#[derive(Clone, Debug)]
pub struct LaneSchedule<'c> {
    circuit: &'c Circuit,
    lanes: Vec<Vec<Option<usize>>>,
}

impl<'c> LaneSchedule<'c> {
    /// Build the schedule for `circuit`
    ///
    /// # Example
    /// ```
    /// use qusat_core::{Circuit, LaneSchedule};
    ///
    /// let mut circuit = Circuit::new(2);
    /// circuit.h(0).unwrap().cx(0, 1).unwrap();
    ///
    /// let schedule = LaneSchedule::from_circuit(&circuit);
    /// assert_eq!(schedule.depth(), 2);
    /// assert!(schedule.slot(1, 0).is_none());
    /// ```
    pub fn from_circuit(circuit: &'c Circuit) -> Self {
        let mut lanes: Vec<Vec<Option<usize>>> = vec![Vec::new(); circuit.num_qubits()];

        for (i, op) in circuit.operations().enumerate() {
            let level = op
                .qubits()
                .map(|q| lanes[q.index()].len())
                .max()
                .unwrap_or(0);

            for qubit in op.qubits() {
                let lane = &mut lanes[qubit.index()];
                lane.resize(level, None);
                lane.push(Some(i));
            }
        }

        Self { circuit, lanes }
    }

    /// The circuit this schedule was built from
    pub fn circuit(&self) -> &'c Circuit {
        self.circuit
    }

    /// Number of lanes (one per qubit)
    pub fn num_lanes(&self) -> usize {
        self.lanes.len()
    }

    /// Maximum number of slots across all lanes
    pub fn depth(&self) -> usize {
        self.lanes.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Operation indices of one lane, `None` for idle levels
    pub fn lane(&self, qubit: usize) -> &[Option<usize>] {
        self.lanes.get(qubit).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The operation scheduled on `qubit` at `level`, if any
    pub fn slot(&self, qubit: usize, level: usize) -> Option<&'c GateOp> {
        let index = (*self.lanes.get(qubit)?.get(level)?)?;
        self.circuit.get_operation(index)
    }
}
