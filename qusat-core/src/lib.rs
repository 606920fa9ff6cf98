//! Circuit IR for QuSAT
//!
//! This crate provides the circuit-side types the equivalence checker consumes:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`GateOp`] and [`OpType`]: gates with one target and optional controls
//! - [`CliffordOp`]: the closed operation set the tableau simulator supports
//! - [`Circuit`]: ordered gate list on a fixed register
//! - [`LaneSchedule`]: per-qubit, level-aligned view of a circuit
//!
//! # Example
//! ```
//! use qusat_core::{Circuit, LaneSchedule};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(0).unwrap().cx(0, 1).unwrap();
//!
//! let schedule = LaneSchedule::from_circuit(&circuit);
//! assert_eq!(schedule.depth(), 2);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod schedule;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::CircuitError;
pub use gate::{CliffordOp, GateOp, OpType};
pub use qubit::QubitId;
pub use schedule::LaneSchedule;

/// Type alias for results in QuSAT's circuit layer
pub type Result<T> = std::result::Result<T, CircuitError>;
