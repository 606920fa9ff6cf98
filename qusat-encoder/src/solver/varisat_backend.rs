//! SAT backend built on varisat

use super::{BitBlaster, CheckResult, ConstraintSet, SolveOutcome, SolverBackend};
use crate::error::SolverError;
use crate::statistics::StatValue;
use std::collections::BTreeMap;
use varisat::Solver;

/// Bit-blasts each constraint set and hands the CNF to a fresh varisat solver
#[derive(Debug, Clone)]
pub struct VarisatBackend {
    share_comparators: bool,
}

impl Default for VarisatBackend {
    fn default() -> Self {
        Self::new(true)
    }
}

impl VarisatBackend {
    pub fn new(share_comparators: bool) -> Self {
        Self { share_comparators }
    }

    /// CNF that [`check`](SolverBackend::check) would solve for `constraints`
    pub fn blast(&self, constraints: &ConstraintSet) -> BitBlaster {
        BitBlaster::from_constraints(constraints, self.share_comparators)
    }
}

impl SolverBackend for VarisatBackend {
    fn name(&self) -> &str {
        "varisat"
    }

    fn check(&mut self, constraints: &ConstraintSet) -> Result<SolveOutcome, SolverError> {
        let blaster = self.blast(constraints);

        let mut statistics = BTreeMap::new();
        statistics.insert("cnf.variables".to_string(), StatValue::from(blaster.formula().var_count() as u64));
        statistics.insert("cnf.clauses".to_string(), StatValue::from(blaster.formula().len() as u64));
        statistics.insert("bv.variables".to_string(), StatValue::from(constraints.num_variables() as u64));
        statistics.insert("bv.assertions".to_string(), StatValue::from(constraints.num_assertions() as u64));
        statistics.insert("bv.comparators.shared".to_string(), StatValue::from(blaster.shared_hits()));

        let mut solver = Solver::new();
        solver.add_formula(blaster.formula());

        let result = match solver.solve() {
            Ok(true) => CheckResult::Sat,
            Ok(false) => CheckResult::Unsat,
            Err(e) => {
                tracing::warn!(backend = self.name(), error = %e, "solver gave up");
                CheckResult::Unknown
            }
        };

        Ok(SolveOutcome { result, statistics })
    }
}
