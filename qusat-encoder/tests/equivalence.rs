//! Integration tests for Clifford circuit equivalence checking

use qusat_core::Circuit;
use qusat_encoder::{EncoderConfig, SatEncoder, Statistics};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NO_INPUTS: &[&str] = &[];

fn random_clifford(num_qubits: usize, gates: usize, seed: u64) -> Circuit {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut circuit = Circuit::with_capacity(num_qubits, gates);

    for _ in 0..gates {
        let target = rng.gen_range(0..num_qubits);
        let pushed = match rng.gen_range(0..7) {
            0 => circuit.h(target),
            1 => circuit.s(target),
            2 => circuit.sdg(target),
            3 => circuit.x(target),
            4 => circuit.y(target),
            5 => circuit.z(target),
            _ => {
                let control = (target + rng.gen_range(1..num_qubits)) % num_qubits;
                circuit.cx(control, target)
            }
        };
        pushed.unwrap();
    }

    circuit
}

/// Inputs whose stabilizers are every Z_i and every X_i
fn separating_inputs(num_qubits: usize) -> Vec<String> {
    vec![String::new(), "x".repeat(num_qubits)]
}

#[test]
fn test_reflexivity_random_circuits() {
    for seed in 0..20 {
        let circuit = random_clifford(3, 15, seed);
        let mut encoder = SatEncoder::new();
        assert!(
            encoder.test_equal(&circuit, &circuit.clone(), &["", "xZy", "YXx"]),
            "seed {}",
            seed
        );
        assert!(encoder.statistics().equal);
    }
}

#[test]
fn test_removed_gate_is_detected() {
    let mut rng = StdRng::seed_from_u64(42);

    for seed in 0..20 {
        let circuit = random_clifford(3, 12, seed);
        let mut mutated = circuit.clone();
        let removed = mutated.remove(rng.gen_range(0..circuit.len())).unwrap();

        let mut encoder = SatEncoder::new();
        assert!(
            !encoder.test_equal(&circuit, &mutated, &separating_inputs(3)),
            "seed {}: removing {} went unnoticed",
            seed,
            removed
        );
        assert!(encoder.statistics().satisfiable);
    }
}

#[test]
fn test_known_identities() {
    let mut identity = Circuit::new(2);
    identity.id(0).unwrap();

    let mut hh = Circuit::new(2);
    hh.h(0).unwrap().h(0).unwrap();

    let mut s4 = Circuit::new(2);
    s4.s(1).unwrap().s(1).unwrap().s(1).unwrap().s(1).unwrap();

    let mut s_sdg = Circuit::new(2);
    s_sdg.s(0).unwrap().sdg(0).unwrap();

    let mut cx2 = Circuit::new(2);
    cx2.cx(0, 1).unwrap().cx(0, 1).unwrap();

    for circuit in [&hh, &s4, &s_sdg, &cx2] {
        let mut encoder = SatEncoder::new();
        assert!(
            encoder.test_equal(&identity, circuit, &separating_inputs(2)),
            "{:?}",
            circuit
        );
    }
}

#[test]
fn test_swap_decompositions_agree() {
    let mut one = Circuit::new(2);
    one.cx(0, 1).unwrap().cx(1, 0).unwrap().cx(0, 1).unwrap();
    let mut two = Circuit::new(2);
    two.cx(1, 0).unwrap().cx(0, 1).unwrap().cx(1, 0).unwrap();

    let mut encoder = SatEncoder::new();
    assert!(encoder.test_equal(&one, &two, &["xZ", "Yy", "X"]));

    let mut not_swap = Circuit::new(2);
    not_swap.cx(0, 1).unwrap().cx(1, 0).unwrap();
    let mut encoder = SatEncoder::new();
    assert!(!encoder.test_equal(&one, &not_swap, &separating_inputs(2)));
}

#[test]
fn test_derived_gates_match_their_decomposition() {
    let mut y = Circuit::new(1);
    y.y(0).unwrap();
    let mut hsss = Circuit::new(1);
    hsss.h(0).unwrap().s(0).unwrap().s(0).unwrap().s(0).unwrap();

    let mut encoder = SatEncoder::new();
    assert!(encoder.test_equal(&y, &hsss, &["", "x", "y"]));
}

#[test]
fn test_scenarios() {
    let mut bell = Circuit::new(2);
    bell.h(0).unwrap().cx(0, 1).unwrap();
    let mut only_h = Circuit::new(2);
    only_h.h(0).unwrap();

    assert!(SatEncoder::new().test_equal(&bell, &bell.clone(), NO_INPUTS));
    assert!(!SatEncoder::new().test_equal(&bell, &only_h, NO_INPUTS));

    let mut single = Circuit::new(1);
    single.h(0).unwrap();
    assert!(SatEncoder::new().check_satisfiability(&single, NO_INPUTS));
}

#[test]
fn test_non_clifford_rejected() {
    let mut with_t = random_clifford(2, 6, 3);
    with_t.t(1).unwrap();

    let mut encoder = SatEncoder::new();
    assert!(!encoder.is_clifford(&with_t));
    assert!(!encoder.test_equal(&with_t, &with_t.clone(), NO_INPUTS));
    assert!(!encoder.check_satisfiability(&with_t, NO_INPUTS));
    assert_eq!(encoder.statistics(), &Statistics::new());
}

#[test]
fn test_bitwidth_boundaries() {
    // one generator: width 1, every variable blocked below 1
    let mut idle = Circuit::new(1);
    idle.id(0).unwrap();
    let mut encoder = SatEncoder::new();
    assert!(encoder.check_satisfiability(&idle, NO_INPUTS));
    assert_eq!(encoder.statistics().nr_of_generators, 1);

    // three generators: width 2 with blocking
    let mut three = Circuit::new(1);
    three.h(0).unwrap().s(0).unwrap();
    let mut encoder = SatEncoder::new();
    assert!(encoder.check_satisfiability(&three, NO_INPUTS));
    assert_eq!(encoder.statistics().nr_of_generators, 3);

    // four generators fill the width
    let mut four = Circuit::new(1);
    four.h(0).unwrap().s(0).unwrap().s(0).unwrap();
    let mut encoder = SatEncoder::new();
    assert!(encoder.check_satisfiability(&four, NO_INPUTS));
    assert_eq!(encoder.statistics().nr_of_generators, 4);
}

#[test]
fn test_statistics_json() {
    let circuit = random_clifford(3, 10, 11);
    let mut encoder = SatEncoder::new();
    assert!(encoder.test_equal(&circuit, &circuit.clone(), &["x", "Z"]));

    let json = encoder.statistics().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["equivalent"], true);
    assert_eq!(value["satisfiable"], false);
    assert_eq!(value["nrOfQubits"], 3);
    assert_eq!(value["numInputs"], 2);
    assert_eq!(value["numGates"], 20);
    assert!(value["z3map"]["cnf.variables"].as_u64().unwrap() > 0);

    let parsed = Statistics::from_json(&json).unwrap();
    assert_eq!(&parsed, encoder.statistics());
}

#[test]
fn test_dimacs_export() {
    let circuit = random_clifford(2, 8, 5);
    let mut encoder = SatEncoder::with_config(EncoderConfig::plain());
    let dimacs = encoder.generate_dimacs(&circuit, &["", "x"]).unwrap();

    let mut lines = dimacs.lines();
    let header: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
    assert_eq!(header[..2], ["p", "cnf"]);
    let num_vars: i64 = header[2].parse().unwrap();
    let num_clauses: usize = header[3].parse().unwrap();

    let clauses: Vec<Vec<i64>> = lines
        .map(|l| l.split_whitespace().map(|t| t.parse().unwrap()).collect())
        .collect();
    assert_eq!(clauses.len(), num_clauses);
    for clause in &clauses {
        assert_eq!(clause.last(), Some(&0));
        assert!(clause.iter().all(|lit| lit.abs() <= num_vars));
    }
}
