//! Stabilizer tableau simulation for QuSAT
//!
//! This crate provides the state side of the generator encoding:
//!
//! - [`TableauState`]: X/Z bit matrices plus phases of one simulated input,
//!   updated in place by H, S and CNOT (and the gates derived from them)
//! - [`GeneratorSet`]: the packed, hashable generator rows of a state at one
//!   circuit level, used as the deduplication key
//! - [`BasisState`]: the single-qubit input alphabet
//!
//! # Example
//!
//! ```
//! use qusat_tableau::TableauState;
//!
//! let mut a = TableauState::initialize(2, "x");
//! let mut b = TableauState::new(2);
//! b.apply_h(0);
//! assert_eq!(a.level_generator(), b.level_generator());
//!
//! a.apply_cnot(0, 1);
//! assert_ne!(a.level_generator(), b.level_generator());
//! ```

pub mod generator;
pub mod input;
pub mod tableau;

pub use generator::{GeneratorId, GeneratorSet};
pub use input::{parse_input, BasisState};
pub use tableau::TableauState;
