//! Qubit addressing

use std::fmt;

/// Type-safe identifier for a qubit (its lane index in the schedule)
///
/// # Example
/// ```
/// use qusat_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1: QubitId = 1.into();
/// assert!(q0 < q1);
/// assert_eq!(q1.index(), 1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The lane index of this qubit
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Returns `true` if this qubit exists in a register of `num_qubits`
    #[inline]
    pub const fn is_within(&self, num_qubits: usize) -> bool {
        self.0 < num_qubits
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}
