//! Bit-blasting of bit-vector constraints into CNF
//!
//! Every bit-vector variable becomes one SAT literal per bit (LSB first).
//! Comparisons are built from AND/XNOR gates with Tseitin clauses, constants
//! are folded before any clause is emitted, and (optionally) structurally
//! identical gates are encoded once.

use super::{BoolExpr, BvTerm, ConstraintSet};
use ahash::AHashMap;
use std::fmt::Write as _;
use std::ops::Not;
use varisat::{CnfFormula, ExtendFormula, Lit};

/// A gate output: either a folded constant or a CNF literal
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Signal {
    Const(bool),
    Lit(Lit),
}

impl Not for Signal {
    type Output = Signal;

    fn not(self) -> Signal {
        match self {
            Signal::Const(b) => Signal::Const(!b),
            Signal::Lit(l) => Signal::Lit(!l),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum GateKey {
    And(Vec<Lit>),
    Xnor(Lit, Lit),
}

/// Incremental CNF builder for one [`ConstraintSet`]
pub struct BitBlaster {
    formula: CnfFormula,
    bits: Vec<Vec<Lit>>,
    share: bool,
    gates: AHashMap<GateKey, Lit>,
    shared_hits: u64,
}

impl BitBlaster {
    /// Create an empty builder; `share` enables structural hashing of gates
    pub fn new(share: bool) -> Self {
        Self {
            formula: CnfFormula::new(),
            bits: Vec::new(),
            share,
            gates: AHashMap::new(),
            shared_hits: 0,
        }
    }

    /// Bit-blast every variable and assertion of `constraints`
    pub fn from_constraints(constraints: &ConstraintSet, share: bool) -> Self {
        let mut blaster = Self::new(share);
        for &(_, width) in constraints.variables() {
            blaster.declare(width);
        }
        for expr in constraints.assertions() {
            blaster.assert(expr);
        }
        blaster
    }

    /// Allocate the literals of the next variable
    pub fn declare(&mut self, width: u32) {
        let lits = (0..width).map(|_| self.formula.new_lit()).collect();
        self.bits.push(lits);
    }

    /// Literals of a declared variable, LSB first
    pub fn variable_bits(&self, index: usize) -> &[Lit] {
        &self.bits[index]
    }

    /// Add `expr` as a hard constraint
    pub fn assert(&mut self, expr: &BoolExpr) {
        match self.encode(expr) {
            Signal::Const(true) => {}
            Signal::Const(false) => {
                let contradiction = self.formula.new_lit();
                self.formula.add_clause(&[contradiction]);
                self.formula.add_clause(&[!contradiction]);
            }
            Signal::Lit(l) => self.formula.add_clause(&[l]),
        }
    }

    /// Number of gates reused through structural hashing
    pub fn shared_hits(&self) -> u64 {
        self.shared_hits
    }

    pub fn formula(&self) -> &CnfFormula {
        &self.formula
    }

    pub fn into_formula(self) -> CnfFormula {
        self.formula
    }

    fn encode(&mut self, expr: &BoolExpr) -> Signal {
        match expr {
            BoolExpr::Eq(a, b) => self.equal(*a, *b),
            BoolExpr::Ne(a, b) => !self.equal(*a, *b),
            BoolExpr::Ult(a, b) => self.ult(*a, *b),
            BoolExpr::Implies(a, b) => {
                let a = self.encode(a);
                let b = self.encode(b);
                !self.and(&[a, !b])
            }
            BoolExpr::Iff(a, b) => {
                let a = self.encode(a);
                let b = self.encode(b);
                self.xnor(a, b)
            }
        }
    }

    fn term_bits(&self, term: BvTerm) -> Vec<Signal> {
        match term {
            BvTerm::Var(v) => self.bits[v.index()].iter().map(|&l| Signal::Lit(l)).collect(),
            BvTerm::Const { value, width } => (0..width)
                .map(|k| Signal::Const((value >> k) & 1 == 1))
                .collect(),
        }
    }

    fn equal(&mut self, a: BvTerm, b: BvTerm) -> Signal {
        let a = self.term_bits(a);
        let b = self.term_bits(b);
        let same: Vec<Signal> = a.into_iter().zip(b).map(|(x, y)| self.xnor(x, y)).collect();
        self.and(&same)
    }

    /// Unsigned `a < b`, rippled from the LSB
    fn ult(&mut self, a: BvTerm, b: BvTerm) -> Signal {
        let a = self.term_bits(a);
        let b = self.term_bits(b);
        let mut less = Signal::Const(false);
        for (x, y) in a.into_iter().zip(b) {
            let strictly = self.and(&[!x, y]);
            let same = self.xnor(x, y);
            let carried = self.and(&[same, less]);
            less = self.or(&[strictly, carried]);
        }
        less
    }

    fn or(&mut self, inputs: &[Signal]) -> Signal {
        let negated: Vec<Signal> = inputs.iter().map(|&s| !s).collect();
        !self.and(&negated)
    }

    fn and(&mut self, inputs: &[Signal]) -> Signal {
        let mut lits = Vec::with_capacity(inputs.len());
        for &input in inputs {
            match input {
                Signal::Const(false) => return Signal::Const(false),
                Signal::Const(true) => {}
                Signal::Lit(l) => lits.push(l),
            }
        }
        lits.sort_unstable_by_key(|l| l.code());
        lits.dedup();
        if lits.windows(2).any(|w| w[0].var() == w[1].var()) {
            return Signal::Const(false);
        }
        match lits.len() {
            0 => return Signal::Const(true),
            1 => return Signal::Lit(lits[0]),
            _ => {}
        }

        let key = GateKey::And(lits.clone());
        if let Some(out) = self.lookup(&key) {
            return Signal::Lit(out);
        }

        let out = self.formula.new_lit();
        let mut long = Vec::with_capacity(lits.len() + 1);
        long.push(out);
        for &l in &lits {
            self.formula.add_clause(&[!out, l]);
            long.push(!l);
        }
        self.formula.add_clause(&long);
        self.remember(key, out);
        Signal::Lit(out)
    }

    fn xnor(&mut self, a: Signal, b: Signal) -> Signal {
        let (a, b) = match (a, b) {
            (Signal::Const(c), s) | (s, Signal::Const(c)) => return if c { s } else { !s },
            (Signal::Lit(a), Signal::Lit(b)) => (a, b),
        };
        if a == b {
            return Signal::Const(true);
        }
        if a == !b {
            return Signal::Const(false);
        }

        // xnor(!a, b) == !xnor(a, b): normalise both inputs to positive literals
        let flip = a.is_negative() ^ b.is_negative();
        let (pa, pb) = (a.var().positive(), b.var().positive());
        let (pa, pb) = if pa.code() <= pb.code() { (pa, pb) } else { (pb, pa) };

        let key = GateKey::Xnor(pa, pb);
        let out = match self.lookup(&key) {
            Some(out) => out,
            None => {
                let out = self.formula.new_lit();
                self.formula.add_clause(&[!out, !pa, pb]);
                self.formula.add_clause(&[!out, pa, !pb]);
                self.formula.add_clause(&[out, pa, pb]);
                self.formula.add_clause(&[out, !pa, !pb]);
                self.remember(key, out);
                out
            }
        };
        if flip {
            Signal::Lit(!out)
        } else {
            Signal::Lit(out)
        }
    }

    fn lookup(&mut self, key: &GateKey) -> Option<Lit> {
        if !self.share {
            return None;
        }
        let hit = self.gates.get(key).copied();
        if hit.is_some() {
            self.shared_hits += 1;
        }
        hit
    }

    fn remember(&mut self, key: GateKey, out: Lit) {
        if self.share {
            self.gates.insert(key, out);
        }
    }
}

/// Render a CNF formula in DIMACS format
pub fn write_dimacs(formula: &CnfFormula) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "p cnf {} {}", formula.var_count(), formula.len());
    for clause in formula.iter() {
        for lit in clause {
            let _ = write!(out, "{} ", lit.to_dimacs());
        }
        out.push_str("0\n");
    }
    out
}
