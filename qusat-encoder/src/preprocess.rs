//! Circuit preprocessing: tableau simulation into generator transitions
//!
//! Every input state is simulated through the circuit level by level. After
//! each level the state's generator set is resolved through the shared
//! [`GeneratorRegistry`], and the step from the previous ID to the new one is
//! recorded as an edge in that level's transition map.

use crate::error::Result;
use crate::registry::GeneratorRegistry;
use crate::statistics::Statistics;
use qusat_core::{CliffordOp, LaneSchedule};
use qusat_tableau::{GeneratorId, GeneratorSet, TableauState};
use std::collections::BTreeMap;
use std::time::Instant;

/// Per-level transitions of one circuit over a set of inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CircuitRepresentation {
    /// `generator_mappings[i]` maps the ID before level `i` to the ID after it
    generator_mappings: Vec<BTreeMap<GeneratorId, GeneratorId>>,
    /// Generator sets of every ID this circuit touched
    id_generator_map: BTreeMap<GeneratorId, GeneratorSet>,
}

impl CircuitRepresentation {
    /// Number of levels (one transition map per level)
    pub fn depth(&self) -> usize {
        self.generator_mappings.len()
    }

    pub fn level(&self, level: usize) -> Option<&BTreeMap<GeneratorId, GeneratorId>> {
        self.generator_mappings.get(level)
    }

    pub fn levels(&self) -> &[BTreeMap<GeneratorId, GeneratorId>] {
        &self.generator_mappings
    }

    pub fn generator(&self, id: GeneratorId) -> Option<&GeneratorSet> {
        self.id_generator_map.get(&id)
    }

    /// IDs of the initial states, in first-seen order of their transitions
    pub fn initial_ids(&self) -> impl Iterator<Item = GeneratorId> + '_ {
        self.generator_mappings
            .first()
            .into_iter()
            .flat_map(|level| level.keys().copied())
    }

    /// Total number of recorded edges across all levels
    pub fn num_transitions(&self) -> usize {
        self.generator_mappings.iter().map(BTreeMap::len).sum()
    }
}

/// A simulated input together with the ID of its current generator set
struct TrackedState {
    tableau: TableauState,
    id: GeneratorId,
}

/// Simulates circuits against a borrowed registry
///
/// The input-generator boundary is frozen the first time any circuit is
/// preprocessed through the same `input_generators` slot; later circuits
/// reuse it even if their inputs add new generator sets.
pub struct Preprocessor<'a> {
    registry: &'a mut GeneratorRegistry,
    input_generators: &'a mut Option<usize>,
    stats: &'a mut Statistics,
}

impl<'a> Preprocessor<'a> {
    pub fn new(
        registry: &'a mut GeneratorRegistry,
        input_generators: &'a mut Option<usize>,
        stats: &'a mut Statistics,
    ) -> Self {
        Self {
            registry,
            input_generators,
            stats,
        }
    }

    /// Simulate `schedule` over `inputs`
    ///
    /// # Arguments
    ///
    /// * `schedule` - Lane schedule of a Clifford circuit
    /// * `inputs` - One input string per simulated state; empty means a single
    ///   all-|0⟩ state
    ///
    /// # Errors
    ///
    /// Returns [`EncoderError::NonCliffordGate`](crate::EncoderError::NonCliffordGate)
    /// if the scheduled circuit contains an unsupported gate.
    pub fn preprocess<S: AsRef<str>>(
        &mut self,
        schedule: &LaneSchedule<'_>,
        inputs: &[S],
    ) -> Result<CircuitRepresentation> {
        let start = Instant::now();
        let circuit = schedule.circuit();
        let ops = circuit.clifford_ops()?;
        let num_qubits = circuit.num_qubits();
        let depth = schedule.depth();
        self.stats.circuit_depth = self.stats.circuit_depth.max(depth);

        let mut rep = CircuitRepresentation {
            generator_mappings: Vec::with_capacity(depth),
            id_generator_map: BTreeMap::new(),
        };

        let tableaus: Vec<TableauState> = if inputs.is_empty() {
            vec![TableauState::new(num_qubits)]
        } else {
            inputs
                .iter()
                .map(|spec| TableauState::initialize(num_qubits, spec.as_ref()))
                .collect()
        };
        let mut states: Vec<TrackedState> = tableaus
            .into_iter()
            .map(|tableau| {
                let id = self.resolve(&mut rep, &tableau);
                TrackedState { tableau, id }
            })
            .collect();

        if self.input_generators.is_none() {
            *self.input_generators = Some(self.registry.len());
        }

        for level in 0..depth {
            for lane in 0..schedule.num_lanes() {
                let Some(Some(index)) = schedule.lane(lane).get(level).copied() else {
                    continue;
                };
                let op = ops[index];
                if op.anchor() != lane {
                    continue;
                }
                self.stats.nr_of_gates += 1;
                for state in &mut states {
                    apply(&mut state.tableau, op);
                }
            }

            let mut transitions = BTreeMap::new();
            for state in &mut states {
                let next = self.resolve(&mut rep, &state.tableau);
                transitions.entry(state.id).or_insert(next);
                state.id = next;
            }
            rep.generator_mappings.push(transitions);
        }

        let elapsed = start.elapsed();
        self.stats.add_preproc_time(elapsed);
        tracing::debug!(
            depth,
            states = states.len(),
            generators = self.registry.len(),
            transitions = rep.num_transitions(),
            ?elapsed,
            "preprocessed circuit"
        );

        Ok(rep)
    }

    fn resolve(&mut self, rep: &mut CircuitRepresentation, tableau: &TableauState) -> GeneratorId {
        let generator = tableau.level_generator();
        let id = self.registry.lookup_or_insert(generator.clone());
        rep.id_generator_map.entry(id).or_insert(generator);
        id
    }
}

fn apply(tableau: &mut TableauState, op: CliffordOp) {
    match op {
        CliffordOp::I(_) => {}
        CliffordOp::H(q) => tableau.apply_h(q),
        CliffordOp::S(q) => tableau.apply_s(q),
        CliffordOp::Sdg(q) => tableau.apply_sdg(q),
        CliffordOp::X(q) => tableau.apply_x(q),
        CliffordOp::Y(q) => tableau.apply_y(q),
        CliffordOp::Z(q) => tableau.apply_z(q),
        CliffordOp::Cnot { control, target } => tableau.apply_cnot(control, target),
    }
}
