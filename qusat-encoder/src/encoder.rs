//! Top-level SAT encoder

use crate::config::EncoderConfig;
use crate::constraints::ConstraintBuilder;
use crate::error::{EncoderError, Result};
use crate::preprocess::{CircuitRepresentation, Preprocessor};
use crate::registry::GeneratorRegistry;
use crate::solver::{write_dimacs, BitBlaster, CheckResult, ConstraintSet, SolverBackend, VarisatBackend};
use crate::statistics::{millis, Statistics};
use qusat_core::{Circuit, LaneSchedule};
use std::time::Instant;

/// Equivalence and satisfiability checks for Clifford circuits
///
/// The encoder owns the generator registry for its whole lifetime, so IDs
/// stay stable across calls, and the number of input generators is fixed by
/// the first circuit ever preprocessed. Statistics describe the most recent
/// top-level call only.
///
/// # Example
///
/// ```
/// use qusat_core::Circuit;
/// use qusat_encoder::SatEncoder;
///
/// let mut bell = Circuit::new(2);
/// bell.h(0).unwrap().cx(0, 1).unwrap();
/// let mut only_h = Circuit::new(2);
/// only_h.h(0).unwrap();
///
/// let mut encoder = SatEncoder::new();
/// assert!(encoder.test_equal(&bell, &bell.clone(), &[] as &[&str]));
///
/// let mut encoder = SatEncoder::new();
/// assert!(!encoder.test_equal(&bell, &only_h, &[] as &[&str]));
/// ```
pub struct SatEncoder<B = VarisatBackend> {
    registry: GeneratorRegistry,
    stats: Statistics,
    config: EncoderConfig,
    input_generators: Option<usize>,
    backend: B,
}

impl SatEncoder<VarisatBackend> {
    /// Create an encoder with the default configuration
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    pub fn with_config(config: EncoderConfig) -> Self {
        let backend = VarisatBackend::new(config.share_comparators);
        Self::with_backend(backend, config)
    }
}

impl Default for SatEncoder<VarisatBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SolverBackend> SatEncoder<B> {
    /// Create an encoder that decides constraint sets with `backend`
    pub fn with_backend(backend: B, config: EncoderConfig) -> Self {
        Self {
            registry: GeneratorRegistry::new(),
            stats: Statistics::new(),
            config,
            input_generators: None,
            backend,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Statistics of the most recent top-level call
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Number of generator sets that count as valid inputs, once frozen
    pub fn input_generators(&self) -> Option<usize> {
        self.input_generators
    }

    /// Whether `circuit` only contains gates the tableau can simulate
    pub fn is_clifford(&self, circuit: &Circuit) -> bool {
        circuit.is_clifford()
    }

    /// Check whether two circuits map every given input to the same state
    ///
    /// # Arguments
    ///
    /// * `one`, `two` - Circuits over the same number of qubits
    /// * `inputs` - Input strings, one character per qubit; empty means the
    ///   all-|0⟩ input only
    ///
    /// # Returns
    ///
    /// `true` iff the miter instance is unsatisfiable. Rejected circuits,
    /// degenerate encodings and inconclusive solver runs report `false`.
    #[tracing::instrument(skip_all, fields(qubits = one.num_qubits(), inputs = inputs.len()))]
    pub fn test_equal<S: AsRef<str>>(&mut self, one: &Circuit, two: &Circuit, inputs: &[S]) -> bool {
        self.stats = Statistics::new();
        match self.try_test_equal(one, two, inputs) {
            Ok(equal) => equal,
            Err(e) => {
                tracing::warn!(error = %e, "equivalence check aborted");
                false
            }
        }
    }

    /// Check whether the single-circuit instance of `circuit` is satisfiable
    #[tracing::instrument(skip_all, fields(qubits = circuit.num_qubits(), inputs = inputs.len()))]
    pub fn check_satisfiability<S: AsRef<str>>(&mut self, circuit: &Circuit, inputs: &[S]) -> bool {
        self.stats = Statistics::new();
        let result = self
            .build_sat_instance(circuit, inputs)
            .map(|set| self.is_satisfiable(&set));
        match result {
            Ok(satisfiable) => satisfiable,
            Err(e) => {
                tracing::warn!(error = %e, "satisfiability check aborted");
                false
            }
        }
    }

    /// Decide `constraints` with the backend and record the outcome
    ///
    /// An inconclusive or failed run counts as not satisfiable.
    pub fn is_satisfiable(&mut self, constraints: &ConstraintSet) -> bool {
        self.solve(constraints) == CheckResult::Sat
    }

    /// DIMACS text of the single-circuit instance of `circuit`
    ///
    /// # Errors
    ///
    /// Fails on non-Clifford circuits and degenerate encodings.
    #[tracing::instrument(skip_all, fields(qubits = circuit.num_qubits()))]
    pub fn generate_dimacs<S: AsRef<str>>(&mut self, circuit: &Circuit, inputs: &[S]) -> Result<String> {
        self.stats = Statistics::new();
        let set = self.build_sat_instance(circuit, inputs)?;
        let blaster = BitBlaster::from_constraints(&set, self.config.share_comparators);
        Ok(write_dimacs(blaster.formula()))
    }

    fn try_test_equal<S: AsRef<str>>(&mut self, one: &Circuit, two: &Circuit, inputs: &[S]) -> Result<bool> {
        for circuit in [one, two] {
            circuit.clifford_ops()?;
            if circuit.is_empty() {
                return Err(EncoderError::EmptyCircuit);
            }
        }
        if one.num_qubits() != two.num_qubits() {
            return Err(EncoderError::QubitCountMismatch(one.num_qubits(), two.num_qubits()));
        }

        self.stats.nr_of_qubits = one.num_qubits();
        self.stats.nr_of_diff_input_states = inputs.len();

        let rep_one = self.preprocess(one, inputs)?;
        let rep_two = self.preprocess(two, inputs)?;

        let input_generators = self.input_generators.unwrap_or(self.registry.len());
        let set = ConstraintBuilder::new(self.registry.len(), &mut self.stats)?
            .construct_miter_instance(&rep_one, &rep_two, input_generators)?;

        let equal = match self.solve(&set) {
            CheckResult::Unsat => true,
            CheckResult::Sat => false,
            CheckResult::Unknown => {
                tracing::warn!("solver was inconclusive, reporting circuits as different");
                false
            }
        };
        self.stats.equal = equal;
        tracing::debug!(equal, generators = self.registry.len(), "equivalence check finished");
        Ok(equal)
    }

    fn build_sat_instance<S: AsRef<str>>(&mut self, circuit: &Circuit, inputs: &[S]) -> Result<ConstraintSet> {
        circuit.clifford_ops()?;
        self.stats.nr_of_qubits = circuit.num_qubits();
        self.stats.nr_of_diff_input_states = inputs.len();

        let rep = self.preprocess(circuit, inputs)?;
        ConstraintBuilder::new(self.registry.len(), &mut self.stats)?.construct_sat_instance(&rep)
    }

    fn preprocess<S: AsRef<str>>(&mut self, circuit: &Circuit, inputs: &[S]) -> Result<CircuitRepresentation> {
        let schedule = LaneSchedule::from_circuit(circuit);
        Preprocessor::new(&mut self.registry, &mut self.input_generators, &mut self.stats)
            .preprocess(&schedule, inputs)
    }

    fn solve(&mut self, constraints: &ConstraintSet) -> CheckResult {
        let start = Instant::now();
        let outcome = self.backend.check(constraints);
        let elapsed = start.elapsed();
        self.stats.solving_time += millis(elapsed);

        let result = match outcome {
            Ok(outcome) => {
                if self.config.collect_solver_statistics {
                    self.stats.solver_stats.extend(outcome.statistics);
                }
                outcome.result
            }
            Err(e) => {
                tracing::warn!(backend = self.backend.name(), error = %e, "solver failed");
                CheckResult::Unknown
            }
        };
        if result == CheckResult::Unknown {
            tracing::warn!(backend = self.backend.name(), "satisfiability unknown");
        }

        self.stats.satisfiable = result == CheckResult::Sat;
        tracing::debug!(%result, ?elapsed, "solved constraint set");
        result
    }
}
