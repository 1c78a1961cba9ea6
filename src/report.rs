//! Name-based rendering of a simulation.
//!
//! The core works on state handles; a [`SimulationReport`] resolves them
//! to names so the result can be printed or serialized on its own.

use crate::core::{Automaton, DeadEnd, Simulation, StateSet, Verdict};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStep {
    pub index: usize,
    pub symbol: Option<char>,
    pub states: Vec<String>,
}

/// Trace and verdict with state names.
///
/// `Display` prints one line per step followed by the verdict:
///
/// ```text
/// Step 0: Current states = {q0}
/// Step 1: After symbol 'a', current states = {q0, q1}
/// String ends in states {q0, q1}. Not accepted.
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub steps: Vec<ReportStep>,
    pub accepted: bool,
    /// Final state that justified acceptance.
    pub accepted_by: Option<String>,
    /// Ending configuration; empty after a dead end.
    pub final_states: Vec<String>,
    pub dead_end: Option<DeadEnd>,
}

impl SimulationReport {
    pub fn new(automaton: &Automaton, simulation: &Simulation) -> Self {
        let names = |set: &StateSet| -> Vec<String> {
            automaton.state_names(set).map(str::to_string).collect()
        };

        let steps = simulation
            .trace
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| ReportStep {
                index,
                symbol: step.symbol,
                states: names(&step.configuration),
            })
            .collect();

        let final_states = simulation
            .trace
            .last()
            .map(|step| names(&step.configuration))
            .unwrap_or_default();

        let accepted_by = match simulation.verdict {
            Verdict::Accepted { via } => automaton.state_name(via).map(str::to_string),
            Verdict::Rejected { .. } => None,
        };

        Self {
            steps,
            accepted: simulation.accepted(),
            accepted_by,
            final_states,
            dead_end: simulation.dead_end(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

struct Braced<'a>(&'a [String]);

impl fmt::Display for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match (step.symbol, self.dead_end) {
                (None, _) => {
                    writeln!(f, "Step 0: Current states = {}", Braced(&step.states))?
                }
                (Some(symbol), Some(dead_end)) if dead_end.step == step.index => writeln!(
                    f,
                    "Step {}: No transitions on symbol '{symbol}'. String rejected.",
                    step.index
                )?,
                (Some(symbol), _) => writeln!(
                    f,
                    "Step {}: After symbol '{symbol}', current states = {}",
                    step.index,
                    Braced(&step.states)
                )?,
            }
        }

        if self.dead_end.is_some() {
            return Ok(());
        }

        match &self.accepted_by {
            Some(state) => write!(f, "String ends in final state {state}. Accepted."),
            None => write!(
                f,
                "String ends in states {}. Not accepted.",
                Braced(&self.final_states)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::AutomatonBuilder;
    use crate::core::simulate;

    fn ends_with_ab() -> Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1", "q2"])
            .alphabet("ab")
            .transition("q0", 'a', "q0")
            .transition("q0", 'a', "q1")
            .transition("q0", 'b', "q0")
            .transition("q1", 'b', "q2")
            .start("q0")
            .final_state("q2")
            .build()
            .unwrap()
    }

    #[test]
    fn renders_accepting_run() {
        let nfa = ends_with_ab();
        let report = SimulationReport::new(&nfa, &simulate(&nfa, "ab"));
        assert_eq!(
            report.to_string(),
            "Step 0: Current states = {q0}\n\
             Step 1: After symbol 'a', current states = {q0, q1}\n\
             Step 2: After symbol 'b', current states = {q0, q2}\n\
             String ends in final state q2. Accepted."
        );
    }

    #[test]
    fn renders_rejecting_run() {
        let nfa = ends_with_ab();
        let report = SimulationReport::new(&nfa, &simulate(&nfa, "a"));
        assert!(!report.accepted);
        assert_eq!(report.final_states, ["q0", "q1"]);
        assert!(report
            .to_string()
            .ends_with("String ends in states {q0, q1}. Not accepted."));
    }

    #[test]
    fn renders_dead_end() {
        let nfa = AutomatonBuilder::new()
            .states(["q0", "q1"])
            .alphabet("ab")
            .transition("q0", 'a', "q1")
            .start("q0")
            .final_state("q1")
            .build()
            .unwrap();

        let report = SimulationReport::new(&nfa, &simulate(&nfa, "aa"));
        assert_eq!(
            report.to_string(),
            "Step 0: Current states = {q0}\n\
             Step 1: After symbol 'a', current states = {q1}\n\
             Step 2: No transitions on symbol 'a'. String rejected.\n"
        );
        assert!(report.final_states.is_empty());
    }

    #[test]
    fn report_serializes_with_names() {
        let nfa = ends_with_ab();
        let report = SimulationReport::new(&nfa, &simulate(&nfa, "b"));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"q0\""));

        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
