//! Bit-vector encoding of generator transitions
//!
//! Level `k` of a circuit gets a variable `x^k` whose value is the ID of the
//! generator set at that level. Every recorded transition `from -> to` at
//! level `i` constrains `x^(i+1)` given `x^i`. Widths cover every ID in the
//! registry; when the ID range does not fill the width, each variable is
//! additionally bounded by the registry size.

use crate::error::{EncoderError, Result};
use crate::preprocess::CircuitRepresentation;
use crate::solver::{BoolExpr, BvTerm, BvVar, ConstraintSet};
use crate::statistics::{millis, Statistics};
use std::time::Instant;

/// Number of bits needed to address `generator_count` IDs (at least one)
pub fn bitwidth(generator_count: usize) -> u32 {
    if generator_count <= 1 {
        1
    } else {
        usize::BITS - (generator_count - 1).leading_zeros()
    }
}

/// Whether some values of the variable width are not valid IDs
///
/// True for a single generator, whose width is one bit.
pub fn blocking_needed(generator_count: usize) -> bool {
    let width = bitwidth(generator_count);
    width < usize::BITS && generator_count < 1usize << width
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Implication,
    Biconditional,
}

/// Builds constraint sets from preprocessed circuits
pub struct ConstraintBuilder<'a> {
    generator_count: usize,
    width: u32,
    stats: &'a mut Statistics,
}

impl<'a> ConstraintBuilder<'a> {
    /// # Errors
    ///
    /// Returns [`EncoderError::DegenerateEncoding`] when no generator has been
    /// recorded.
    pub fn new(generator_count: usize, stats: &'a mut Statistics) -> Result<Self> {
        if generator_count == 0 {
            return Err(EncoderError::DegenerateEncoding);
        }
        stats.nr_of_generators = generator_count;
        Ok(Self {
            generator_count,
            width: bitwidth(generator_count),
            stats,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Single-circuit instance with implication edges
    pub fn construct_sat_instance(&mut self, rep: &CircuitRepresentation) -> Result<ConstraintSet> {
        let start = Instant::now();
        let mut set = ConstraintSet::new();
        self.encode_circuit(&mut set, rep, "x", Edge::Implication)?;
        self.finish(start, &set);
        Ok(set)
    }

    /// Miter of two circuits: satisfiable iff some shared input leads to
    /// different final generator sets
    pub fn construct_miter_instance(
        &mut self,
        one: &CircuitRepresentation,
        two: &CircuitRepresentation,
        input_generators: usize,
    ) -> Result<ConstraintSet> {
        let start = Instant::now();
        let mut set = ConstraintSet::new();
        let left = self.encode_circuit(&mut set, one, "x", Edge::Biconditional)?;
        let right = self.encode_circuit(&mut set, two, "x'", Edge::Biconditional)?;

        let (first, last) = endpoints(&left)?;
        let (first_other, last_other) = endpoints(&right)?;
        set.add(first.term().equals(first_other))?;
        set.add(last.term().not_equals(last_other))?;

        // a boundary that fills the whole width excludes nothing
        if !self.fills_width(input_generators) {
            let bound = self.constant(input_generators);
            set.add(first.term().ult(bound))?;
            set.add(first_other.term().ult(bound))?;
        }

        self.finish(start, &set);
        Ok(set)
    }

    fn encode_circuit(
        &mut self,
        set: &mut ConstraintSet,
        rep: &CircuitRepresentation,
        prefix: &str,
        edge: Edge,
    ) -> Result<Vec<BvVar>> {
        let vars = (0..=rep.depth())
            .map(|k| set.bv_const(format!("{}^{}", prefix, k), self.width))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.stats.nr_of_sat_vars += vars.len();

        for (level, transitions) in rep.levels().iter().enumerate() {
            let (now, next) = (vars[level], vars[level + 1]);
            for (from, to) in transitions {
                let guard = now.term().equals(self.constant(from.index()));
                let effect = next.term().equals(self.constant(to.index()));
                let constraint: BoolExpr = match edge {
                    Edge::Implication => guard.implies(effect),
                    Edge::Biconditional => guard.iff(effect),
                };
                set.add(constraint)?;
                self.stats.nr_of_functional_constr += 1;
            }
        }

        if blocking_needed(self.generator_count) {
            let bound = self.constant(self.generator_count);
            for var in &vars {
                set.add(var.term().ult(bound))?;
            }
        }

        Ok(vars)
    }

    fn constant(&self, value: usize) -> BvTerm {
        BvTerm::constant(value as u64, self.width)
    }

    fn fills_width(&self, count: usize) -> bool {
        self.width >= usize::BITS || count >= 1usize << self.width
    }

    fn finish(&mut self, start: Instant, set: &ConstraintSet) {
        let elapsed = start.elapsed();
        self.stats.sat_construction_time += millis(elapsed);
        tracing::debug!(
            width = self.width,
            variables = set.num_variables(),
            assertions = set.num_assertions(),
            ?elapsed,
            "constructed constraint set"
        );
    }
}

fn endpoints(vars: &[BvVar]) -> Result<(BvVar, BvVar)> {
    match (vars.first(), vars.last()) {
        (Some(&first), Some(&last)) => Ok((first, last)),
        _ => Err(EncoderError::DegenerateEncoding),
    }
}
