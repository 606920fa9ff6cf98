//! Stabilizer tableau with the elementary Clifford update rules
//!
//! Row `i` of the tableau is the `i`-th stabilizer generator; column `j` is
//! qubit `j`. Only the stabilizer half is tracked (no destabilizers), which is
//! all the generator-level encoding needs.

use crate::generator::GeneratorSet;
use crate::input::BasisState;

/// Stabilizer tableau of one simulated input state
///
/// Every primitive silently ignores qubit indices outside `[0, n)`.
///
/// # Example
/// ```
/// use qusat_tableau::TableauState;
///
/// let mut state = TableauState::new(2);
/// state.apply_h(0);
/// state.apply_cnot(0, 1);
/// assert_eq!(state.level_generator().to_string(), "+XX, +ZZ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableauState {
    num_qubits: usize,
    x: Vec<bool>,
    z: Vec<bool>,
    phase: Vec<bool>,
}

impl TableauState {
    /// The all-|0⟩ tableau: X-part zero, Z-part identity, phases zero
    pub fn new(num_qubits: usize) -> Self {
        let mut z = vec![false; num_qubits * num_qubits];
        for i in 0..num_qubits {
            z[i * num_qubits + i] = true;
        }
        Self {
            num_qubits,
            x: vec![false; num_qubits * num_qubits],
            z,
            phase: vec![false; num_qubits],
        }
    }

    /// Tableau for an input specification string
    ///
    /// Qubit `i` is prepared according to character `i` of `spec`; qubits past
    /// the end of the string stay |0⟩.
    pub fn initialize(num_qubits: usize, spec: &str) -> Self {
        let mut state = Self::new(num_qubits);
        for (qubit, c) in spec.chars().enumerate() {
            BasisState::from_char(c).prepare(&mut state, qubit);
        }
        state
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    #[inline]
    fn at(&self, row: usize, qubit: usize) -> usize {
        row * self.num_qubits + qubit
    }

    /// X-part bit of generator `row` on `qubit`
    pub fn x(&self, row: usize, qubit: usize) -> bool {
        self.x[self.at(row, qubit)]
    }

    /// Z-part bit of generator `row` on `qubit`
    pub fn z(&self, row: usize, qubit: usize) -> bool {
        self.z[self.at(row, qubit)]
    }

    /// Phase bit of generator `row`
    pub fn phase(&self, row: usize) -> bool {
        self.phase[row]
    }

    pub fn apply_h(&mut self, target: usize) {
        if target >= self.num_qubits {
            return;
        }
        for i in 0..self.num_qubits {
            let t = self.at(i, target);
            self.phase[i] ^= self.x[t] & self.z[t];
            self.x[t] ^= self.z[t];
            self.z[t] ^= self.x[t];
            self.x[t] ^= self.z[t];
        }
    }

    pub fn apply_s(&mut self, target: usize) {
        if target >= self.num_qubits {
            return;
        }
        for i in 0..self.num_qubits {
            let t = self.at(i, target);
            self.phase[i] ^= self.x[t] & self.z[t];
            self.z[t] ^= self.x[t];
        }
    }

    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        if control >= self.num_qubits || target >= self.num_qubits {
            return;
        }
        for i in 0..self.num_qubits {
            let c = self.at(i, control);
            let t = self.at(i, target);
            self.phase[i] ^= (self.x[c] & self.z[t]) & !(self.x[t] ^ self.z[c]);
            self.x[t] ^= self.x[c];
            self.z[c] ^= self.z[t];
        }
    }

    /// S;S;S
    pub fn apply_sdg(&mut self, target: usize) {
        self.apply_s(target);
        self.apply_s(target);
        self.apply_s(target);
    }

    /// H;S;S;H
    pub fn apply_z(&mut self, target: usize) {
        self.apply_h(target);
        self.apply_s(target);
        self.apply_s(target);
        self.apply_h(target);
    }

    /// H;S;S
    pub fn apply_x(&mut self, target: usize) {
        self.apply_h(target);
        self.apply_s(target);
        self.apply_s(target);
    }

    /// H;S;S;S
    pub fn apply_y(&mut self, target: usize) {
        self.apply_h(target);
        self.apply_s(target);
        self.apply_s(target);
        self.apply_s(target);
    }

    /// Current generator rows packed into their canonical key
    pub fn level_generator(&self) -> GeneratorSet {
        let n = self.num_qubits;
        GeneratorSet::from_fn(n, |row, col| {
            if col < n {
                self.x(row, col)
            } else if col < 2 * n {
                self.z(row, col - n)
            } else {
                self.phase(row)
            }
        })
    }
}
