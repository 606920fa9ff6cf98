//! Bit-vector constraint front end and solver backends
//!
//! Constraints are collected into a [`ConstraintSet`] of fixed-width
//! bit-vector variables, constants, and boolean expressions built from
//! equality, disequality, unsigned less-than, implication and biconditional.
//! A [`SolverBackend`] decides the set and reports its own statistics.

mod bitblast;
mod varisat_backend;

pub use bitblast::{write_dimacs, BitBlaster};
pub use varisat_backend::VarisatBackend;

use crate::error::SolverError;
use crate::statistics::StatValue;
use std::collections::BTreeMap;
use std::fmt;

/// Largest supported bit-vector width
pub const MAX_WIDTH: u32 = 64;

/// A declared bit-vector variable
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BvVar {
    index: usize,
    width: u32,
}

impl BvVar {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Shorthand for `BvTerm::from(self)`
    pub fn term(self) -> BvTerm {
        BvTerm::Var(self)
    }
}

/// Operand of a bit-vector comparison
///
/// Constants wider than their declared width are truncated to it, as in
/// SMT-LIB.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BvTerm {
    Var(BvVar),
    Const { value: u64, width: u32 },
}

impl BvTerm {
    pub fn constant(value: u64, width: u32) -> Self {
        BvTerm::Const { value, width }
    }

    pub fn width(&self) -> u32 {
        match *self {
            BvTerm::Var(v) => v.width,
            BvTerm::Const { width, .. } => width,
        }
    }

    pub fn equals(self, other: impl Into<BvTerm>) -> BoolExpr {
        BoolExpr::Eq(self, other.into())
    }

    pub fn not_equals(self, other: impl Into<BvTerm>) -> BoolExpr {
        BoolExpr::Ne(self, other.into())
    }

    /// Unsigned less-than
    pub fn ult(self, other: impl Into<BvTerm>) -> BoolExpr {
        BoolExpr::Ult(self, other.into())
    }
}

impl From<BvVar> for BvTerm {
    fn from(var: BvVar) -> Self {
        BvTerm::Var(var)
    }
}

/// Boolean constraint over bit-vector terms
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    Eq(BvTerm, BvTerm),
    Ne(BvTerm, BvTerm),
    Ult(BvTerm, BvTerm),
    Implies(Box<BoolExpr>, Box<BoolExpr>),
    Iff(Box<BoolExpr>, Box<BoolExpr>),
}

impl BoolExpr {
    pub fn implies(self, consequent: BoolExpr) -> BoolExpr {
        BoolExpr::Implies(Box::new(self), Box::new(consequent))
    }

    pub fn iff(self, other: BoolExpr) -> BoolExpr {
        BoolExpr::Iff(Box::new(self), Box::new(other))
    }
}

/// Declared variables plus asserted constraints
#[derive(Clone, Debug, Default)]
pub struct ConstraintSet {
    variables: Vec<(String, u32)>,
    assertions: Vec<BoolExpr>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a fresh bit-vector variable
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidWidth`] unless `1 <= width <= 64`.
    pub fn bv_const(&mut self, name: impl Into<String>, width: u32) -> Result<BvVar, SolverError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(SolverError::InvalidWidth(width));
        }
        let var = BvVar {
            index: self.variables.len(),
            width,
        };
        self.variables.push((name.into(), width));
        Ok(var)
    }

    /// Assert `expr`
    ///
    /// # Errors
    /// Returns an error if operands differ in width or reference variables
    /// of another constraint set.
    pub fn add(&mut self, expr: BoolExpr) -> Result<(), SolverError> {
        self.check(&expr)?;
        self.assertions.push(expr);
        Ok(())
    }

    fn check(&self, expr: &BoolExpr) -> Result<(), SolverError> {
        match expr {
            BoolExpr::Eq(a, b) | BoolExpr::Ne(a, b) | BoolExpr::Ult(a, b) => {
                for term in [a, b] {
                    match *term {
                        BvTerm::Var(v) if v.index >= self.variables.len() => {
                            return Err(SolverError::UndeclaredVariable(v.index));
                        }
                        BvTerm::Const { width, .. } if width == 0 || width > MAX_WIDTH => {
                            return Err(SolverError::InvalidWidth(width));
                        }
                        _ => {}
                    }
                }
                if a.width() != b.width() {
                    return Err(SolverError::WidthMismatch {
                        left: a.width(),
                        right: b.width(),
                    });
                }
                Ok(())
            }
            BoolExpr::Implies(a, b) | BoolExpr::Iff(a, b) => {
                self.check(a)?;
                self.check(b)
            }
        }
    }

    /// Declared variables as `(name, width)` in declaration order
    pub fn variables(&self) -> &[(String, u32)] {
        &self.variables
    }

    pub fn assertions(&self) -> &[BoolExpr] {
        &self.assertions
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_assertions(&self) -> usize {
        self.assertions.len()
    }
}

/// Verdict of a satisfiability check
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckResult {
    Sat,
    Unsat,
    Unknown,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckResult::Sat => "sat",
            CheckResult::Unsat => "unsat",
            CheckResult::Unknown => "unknown",
        })
    }
}

/// Verdict plus backend statistics
#[derive(Clone, Debug, PartialEq)]
pub struct SolveOutcome {
    pub result: CheckResult,
    pub statistics: BTreeMap<String, StatValue>,
}

/// A decision procedure for [`ConstraintSet`]s
///
/// Backends own their solving session; one backend instance must not be
/// shared across threads while a check is running.
pub trait SolverBackend {
    /// Short backend name used in logs and errors
    fn name(&self) -> &str;

    /// Decide `constraints`
    fn check(&mut self, constraints: &ConstraintSet) -> Result<SolveOutcome, SolverError>;
}
