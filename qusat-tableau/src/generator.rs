//! Canonical packed generator sets
//!
//! The generator set of an `n`-qubit tableau is `n` rows of `2n + 1` bits:
//! the X-part, the Z-part and the phase bit. Rows are concatenated in qubit
//! order and packed into 64-bit words, so equality and hashing are by value
//! over the full content.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// Dense identifier assigned to a distinct generator set
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GeneratorId(usize);

impl GeneratorId {
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for GeneratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Packed stabilizer rows of one state at one circuit level
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GeneratorSet {
    num_qubits: usize,
    words: Box<[u64]>,
}

impl GeneratorSet {
    /// Build a set of `num_qubits` rows, taking bit `col` of row `row` from `bit`
    ///
    /// Columns `0..n` are the X-part, `n..2n` the Z-part and `2n` the phase.
    pub fn from_fn(num_qubits: usize, mut bit: impl FnMut(usize, usize) -> bool) -> Self {
        let row_len = 2 * num_qubits + 1;
        let total = num_qubits * row_len;
        let mut words = vec![0u64; total.div_ceil(WORD_BITS)].into_boxed_slice();

        for row in 0..num_qubits {
            for col in 0..row_len {
                if bit(row, col) {
                    let pos = row * row_len + col;
                    words[pos / WORD_BITS] |= 1 << (pos % WORD_BITS);
                }
            }
        }

        Self { num_qubits, words }
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Bits per row, `2n + 1`
    #[inline]
    pub fn row_len(&self) -> usize {
        2 * self.num_qubits + 1
    }

    /// Read bit `col` of row `row`
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn bit(&self, row: usize, col: usize) -> bool {
        assert!(row < self.num_qubits && col < self.row_len(), "generator bit out of range");
        let pos = row * self.row_len() + col;
        (self.words[pos / WORD_BITS] >> (pos % WORD_BITS)) & 1 == 1
    }

    /// One row unpacked as `x-part ‖ z-part ‖ phase`
    pub fn row(&self, row: usize) -> Vec<bool> {
        (0..self.row_len()).map(|col| self.bit(row, col)).collect()
    }

    /// Phase bit of a row (`true` means a negative sign)
    pub fn phase(&self, row: usize) -> bool {
        self.bit(row, 2 * self.num_qubits)
    }

    /// Signed Pauli string of a row, e.g. `-XZ` or `+IY`
    pub fn pauli_string(&self, row: usize) -> String {
        let n = self.num_qubits;
        let mut s = String::with_capacity(n + 1);
        s.push(if self.phase(row) { '-' } else { '+' });
        for q in 0..n {
            s.push(match (self.bit(row, q), self.bit(row, n + q)) {
                (false, false) => 'I',
                (true, false) => 'X',
                (false, true) => 'Z',
                (true, true) => 'Y',
            });
        }
        s
    }
}

impl fmt::Debug for GeneratorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratorSet[{}]", self)
    }
}

impl fmt::Display for GeneratorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_qubits {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.pauli_string(row))?;
        }
        Ok(())
    }
}
