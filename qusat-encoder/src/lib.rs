//! SAT-based equivalence checking of Clifford circuits
//!
//! Circuits are simulated on stabilizer tableaus for a set of input states.
//! Every distinct generator set reached is given a dense ID, and the circuit
//! becomes a chain of per-level transitions between IDs. Those transitions
//! are encoded as bit-vector constraints and decided by a SAT backend.
//!
//! # Features
//!
//! - **Miter encoding**: two circuits are equivalent on the given inputs iff
//!   the miter instance is unsatisfiable
//! - **Shared registry**: IDs are stable across every circuit an encoder sees
//! - **Pure Rust backend**: bit-vector constraints are bit-blasted into CNF and
//!   solved with varisat, or exported as DIMACS
//! - **Statistics**: sizes, verdicts and timings serializable to JSON
//!
//! # Example
//!
//! ```
//! use qusat_core::Circuit;
//! use qusat_encoder::{EncoderConfig, SatEncoder};
//!
//! let mut one = Circuit::new(2);
//! one.h(0).unwrap().cx(0, 1).unwrap();
//!
//! let mut encoder = SatEncoder::with_config(EncoderConfig::default());
//! assert!(encoder.test_equal(&one, &one.clone(), &["", "x", "Z"]));
//! println!("{}", encoder.statistics());
//! ```

pub mod config;
pub mod constraints;
pub mod encoder;
pub mod error;
pub mod preprocess;
pub mod registry;
pub mod solver;
pub mod statistics;

pub use config::EncoderConfig;
pub use encoder::SatEncoder;
pub use error::{EncoderError, Result, SolverError};
pub use preprocess::CircuitRepresentation;
pub use registry::GeneratorRegistry;
pub use solver::{CheckResult, ConstraintSet, SolverBackend, VarisatBackend};
pub use statistics::{StatValue, Statistics};
