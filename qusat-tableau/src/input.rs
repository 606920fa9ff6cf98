//! Single-qubit input states
//!
//! An input specification is a string with one character per qubit. Each
//! character selects a single-qubit stabilizer state, prepared from |0⟩ by a
//! fixed sequence of H and S updates.

use crate::TableauState;

/// Single-qubit stabilizer state selectable from an input string
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BasisState {
    /// |0⟩, stabilized by +Z (blank or any unlisted character)
    Zero,
    /// |1⟩, stabilized by -Z (`'Z'`)
    One,
    /// |+⟩, stabilized by +X (`'x'`)
    Plus,
    /// |−⟩, stabilized by -X (`'X'`)
    Minus,
    /// |0⟩ + i|1⟩, stabilized by +Y (`'y'`)
    PlusI,
    /// |0⟩ − i|1⟩, stabilized by -Y (`'Y'`)
    MinusI,
}

impl BasisState {
    pub const fn from_char(c: char) -> Self {
        match c {
            'Z' => BasisState::One,
            'x' => BasisState::Plus,
            'X' => BasisState::Minus,
            'y' => BasisState::PlusI,
            'Y' => BasisState::MinusI,
            _ => BasisState::Zero,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            BasisState::Zero => 'I',
            BasisState::One => 'Z',
            BasisState::Plus => 'x',
            BasisState::Minus => 'X',
            BasisState::PlusI => 'y',
            BasisState::MinusI => 'Y',
        }
    }

    /// Prepare this state on `qubit` of a tableau currently holding |0⟩ there
    pub fn prepare(self, tableau: &mut TableauState, qubit: usize) {
        match self {
            BasisState::Zero => {}
            BasisState::One => {
                tableau.apply_h(qubit);
                tableau.apply_s(qubit);
                tableau.apply_s(qubit);
                tableau.apply_h(qubit);
            }
            BasisState::Plus => tableau.apply_h(qubit),
            BasisState::Minus => {
                tableau.apply_h(qubit);
                tableau.apply_s(qubit);
                tableau.apply_s(qubit);
            }
            BasisState::PlusI => {
                tableau.apply_h(qubit);
                tableau.apply_s(qubit);
            }
            BasisState::MinusI => {
                tableau.apply_h(qubit);
                tableau.apply_s(qubit);
                tableau.apply_s(qubit);
                tableau.apply_s(qubit);
            }
        }
    }
}

/// Parse an input specification into per-qubit basis states
///
/// # Example
/// ```
/// use qusat_tableau::input::{parse_input, BasisState};
///
/// assert_eq!(parse_input("Z x"), vec![BasisState::One, BasisState::Zero, BasisState::Plus]);
/// ```
pub fn parse_input(spec: &str) -> Vec<BasisState> {
    spec.chars().map(BasisState::from_char).collect()
}
