//! Integration tests for tableau simulation and generator keys

use qusat_tableau::{parse_input, BasisState, GeneratorSet, TableauState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[derive(Copy, Clone, Debug)]
enum Step {
    H(usize),
    S(usize),
    Cnot(usize, usize),
}

fn random_steps(num_qubits: usize, count: usize, seed: u64) -> Vec<Step> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let a = rng.gen_range(0..num_qubits);
            match rng.gen_range(0..3) {
                0 => Step::H(a),
                1 => Step::S(a),
                _ => Step::Cnot(a, (a + rng.gen_range(1..num_qubits)) % num_qubits),
            }
        })
        .collect()
}

fn apply(state: &mut TableauState, step: Step) {
    match step {
        Step::H(q) => state.apply_h(q),
        Step::S(q) => state.apply_s(q),
        Step::Cnot(c, t) => state.apply_cnot(c, t),
    }
}

/// Apply the inverse of `step`
fn undo(state: &mut TableauState, step: Step) {
    match step {
        Step::H(q) => state.apply_h(q),
        Step::S(q) => state.apply_sdg(q),
        Step::Cnot(c, t) => state.apply_cnot(c, t),
    }
}

#[test]
fn test_random_sequence_then_inverse_restores_state() {
    for seed in 0..10 {
        let initial = TableauState::initialize(4, "xZyX");
        let steps = random_steps(4, 50, seed);

        let mut state = initial.clone();
        for &step in &steps {
            apply(&mut state, step);
        }
        for &step in steps.iter().rev() {
            undo(&mut state, step);
        }

        assert_eq!(state, initial, "seed {}", seed);
        assert_eq!(state.level_generator(), initial.level_generator());
    }
}

#[test]
fn test_input_alphabet_stabilizers() {
    let expected = [
        ('I', "+Z"),
        ('Z', "-Z"),
        ('x', "+X"),
        ('X', "-X"),
        ('y', "+Y"),
        ('Y', "-Y"),
    ];
    for (c, pauli) in expected {
        let state = TableauState::initialize(1, &c.to_string());
        assert_eq!(state.level_generator().to_string(), pauli, "input {:?}", c);
    }
}

#[test]
fn test_spec_shorter_and_longer_than_register() {
    let short = TableauState::initialize(3, "x");
    assert_eq!(short.level_generator().to_string(), "+XII, +IZI, +IIZ");

    let long = TableauState::initialize(2, "xyZZZ");
    assert_eq!(long.level_generator().to_string(), "+XI, +IY");
    assert_eq!(parse_input("xyZZZ").len(), 5);
    assert_eq!(parse_input("?")[0], BasisState::Zero);
}

#[test]
fn test_distinct_inputs_give_distinct_keys() {
    let alphabet = ["", "Z", "x", "X", "y", "Y"];
    let mut keys: HashSet<GeneratorSet> = HashSet::new();
    for a in alphabet {
        for b in alphabet {
            let spec = format!("{:1}{:1}", a, b);
            keys.insert(TableauState::initialize(2, &spec).level_generator());
        }
    }
    assert_eq!(keys.len(), 36);
}

#[test]
fn test_out_of_range_primitives_are_ignored() {
    let mut state = TableauState::initialize(2, "xy");
    let before = state.clone();
    state.apply_h(2);
    state.apply_s(7);
    state.apply_cnot(0, 2);
    state.apply_cnot(5, 1);
    state.apply_y(3);
    assert_eq!(state, before);
}
