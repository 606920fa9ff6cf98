//! Statistics record of one encoder run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A numeric statistic reported by a solver backend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    UInt(u64),
    Double(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            StatValue::UInt(v) => v as f64,
            StatValue::Double(v) => v,
        }
    }
}

impl From<u64> for StatValue {
    fn from(v: u64) -> Self {
        StatValue::UInt(v)
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Double(v)
    }
}

/// Sizes, verdicts and timings of the most recent check
///
/// Everything starts at zero/false and is reset at the beginning of every
/// top-level check, so an aborted check never reports a stale verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Gates simulated across all preprocessed circuits
    #[serde(rename = "numGates")]
    pub nr_of_gates: usize,

    #[serde(rename = "nrOfQubits")]
    pub nr_of_qubits: usize,

    /// Bit-vector variables declared
    #[serde(rename = "numSatVarsCreated")]
    pub nr_of_sat_vars: usize,

    /// Distinct generator sets known to the registry
    #[serde(rename = "numGenerators")]
    pub nr_of_generators: usize,

    /// Implication / biconditional transition constraints
    #[serde(rename = "numFuncConstr")]
    pub nr_of_functional_constr: usize,

    #[serde(rename = "circDepth")]
    pub circuit_depth: usize,

    #[serde(rename = "numInputs")]
    pub nr_of_diff_input_states: usize,

    #[serde(rename = "equivalent")]
    pub equal: bool,

    pub satisfiable: bool,

    /// Milliseconds spent preprocessing (summed over circuits)
    #[serde(rename = "preprocTime")]
    pub preproc_time: u64,

    #[serde(rename = "solvingTime")]
    pub solving_time: u64,

    #[serde(rename = "satConstructionTime")]
    pub sat_construction_time: u64,

    /// Raw backend statistics
    #[serde(rename = "z3map")]
    pub solver_stats: BTreeMap<String, StatValue>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to a pretty-printed JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub(crate) fn add_preproc_time(&mut self, elapsed: Duration) {
        self.preproc_time += millis(elapsed);
    }
}

pub(crate) fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoder Statistics:")?;
        writeln!(f, "  Circuit:")?;
        writeln!(f, "    Qubits: {}", self.nr_of_qubits)?;
        writeln!(f, "    Gates: {}", self.nr_of_gates)?;
        writeln!(f, "    Depth: {}", self.circuit_depth)?;
        writeln!(f, "    Input states: {}", self.nr_of_diff_input_states)?;

        writeln!(f, "\n  Encoding:")?;
        writeln!(f, "    Generators: {}", self.nr_of_generators)?;
        writeln!(f, "    Variables: {}", self.nr_of_sat_vars)?;
        writeln!(f, "    Functional constraints: {}", self.nr_of_functional_constr)?;

        writeln!(f, "\n  Result:")?;
        writeln!(f, "    Equivalent: {}", self.equal)?;
        writeln!(f, "    Satisfiable: {}", self.satisfiable)?;

        writeln!(f, "\n  Time (ms):")?;
        writeln!(f, "    Preprocessing: {}", self.preproc_time)?;
        writeln!(f, "    Construction: {}", self.sat_construction_time)?;
        writeln!(f, "    Solving: {}", self.solving_time)?;

        if !self.solver_stats.is_empty() {
            writeln!(f, "\n  Solver:")?;
            for (key, value) in &self.solver_stats {
                writeln!(f, "    {}: {}", key, value.as_f64())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.nr_of_generators, 0);
        assert!(!stats.equal);
        assert!(!stats.satisfiable);
        assert!(stats.solver_stats.is_empty());
    }

    #[test]
    fn test_json_keys() {
        let mut stats = Statistics {
            nr_of_gates: 3,
            equal: true,
            ..Default::default()
        };
        stats.solver_stats.insert("cnf.clauses".into(), StatValue::UInt(12));
        stats.solver_stats.insert("ratio".into(), StatValue::Double(0.5));

        let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(json["numGates"], 3);
        assert_eq!(json["equivalent"], true);
        assert_eq!(json["satisfiable"], false);
        assert_eq!(json["z3map"]["cnf.clauses"], 12);
        assert_eq!(json["z3map"]["ratio"], 0.5);
    }

    #[test]
    fn test_from_json() {
        let stats = Statistics {
            circuit_depth: 4,
            solving_time: 17,
            ..Default::default()
        };
        let parsed = Statistics::from_json(&stats.to_json().unwrap()).unwrap();
        assert_eq!(parsed, stats);
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(42)), 42);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }
}
