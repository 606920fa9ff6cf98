//! Benchmarks for miter construction and solving

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qusat_core::Circuit;
use qusat_encoder::{EncoderConfig, SatEncoder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_clifford(num_qubits: usize, gates: usize, seed: u64) -> Circuit {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut circuit = Circuit::with_capacity(num_qubits, gates);

    for _ in 0..gates {
        let target = rng.gen_range(0..num_qubits);
        let pushed = match rng.gen_range(0..4) {
            0 => circuit.h(target),
            1 => circuit.s(target),
            2 => circuit.sdg(target),
            _ => {
                let control = (target + rng.gen_range(1..num_qubits)) % num_qubits;
                circuit.cx(control, target)
            }
        };
        pushed.unwrap();
    }

    circuit
}

fn inputs(num_qubits: usize, count: usize) -> Vec<String> {
    let alphabet = ['I', 'Z', 'x', 'X', 'y', 'Y'];
    let mut rng = StdRng::seed_from_u64(99);
    (0..count)
        .map(|_| (0..num_qubits).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect())
        .collect()
}

fn bench_equal_circuits(c: &mut Criterion) {
    let mut group = c.benchmark_group("test_equal");

    for num_qubits in [4, 8, 16].iter() {
        let circuit = random_clifford(*num_qubits, num_qubits * 10, 1);
        let copy = circuit.clone();
        let specs = inputs(*num_qubits, 8);

        for (name, config) in [("shared", EncoderConfig::default()), ("plain", EncoderConfig::plain())] {
            group.bench_with_input(BenchmarkId::new(name, num_qubits), num_qubits, |b, _| {
                b.iter(|| {
                    let mut encoder = SatEncoder::with_config(config.clone());
                    black_box(encoder.test_equal(&circuit, &copy, &specs))
                })
            });
        }
    }

    group.finish();
}

fn bench_mutated_circuits(c: &mut Criterion) {
    let mut group = c.benchmark_group("test_not_equal");

    for num_qubits in [4, 8, 16].iter() {
        let circuit = random_clifford(*num_qubits, num_qubits * 10, 2);
        let mut mutated = circuit.clone();
        mutated.remove(circuit.len() / 2).unwrap();
        let specs = vec![String::new(), "x".repeat(*num_qubits)];

        group.bench_with_input(BenchmarkId::from_parameter(num_qubits), num_qubits, |b, _| {
            b.iter(|| {
                let mut encoder = SatEncoder::new();
                black_box(encoder.test_equal(&circuit, &mutated, &specs))
            })
        });
    }

    group.finish();
}

fn bench_dimacs_export(c: &mut Criterion) {
    let circuit = random_clifford(8, 80, 3);
    let specs = inputs(8, 4);

    c.bench_function("generate_dimacs_8q", |b| {
        b.iter(|| {
            let mut encoder = SatEncoder::new();
            black_box(encoder.generate_dimacs(&circuit, &specs).unwrap())
        })
    });
}

criterion_group!(benches, bench_equal_circuits, bench_mutated_circuits, bench_dimacs_export);
criterion_main!(benches);
