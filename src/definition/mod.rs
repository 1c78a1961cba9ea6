//! Acquisition of automaton definitions.
//!
//! This is the boundary in front of the simulation core. A definition
//! arrives as text or JSON, is validated field by field, and only a fully
//! valid [`Problem`] is handed to the core.
//!
//! # Example
//!
//! ```rust
//! use nfa_trace::definition::{load, Limits};
//!
//! let problem = load(
//!     "states: q0 q1\nalphabet: a\ntransition: q0 a q1\nstart: q0\nfinal: q1\ninput: a",
//!     &Limits::default(),
//! )
//! .unwrap();
//!
//! assert!(problem.simulate().accepted());
//! ```

pub mod error;
pub mod limits;
pub mod parser;
pub mod validate;

pub use error::{DefinitionError, Field, LoadError, ParseError, ParseErrorKind};
pub use limits::Limits;
pub use parser::parse;
pub use validate::validate;

use crate::core::{simulate, Automaton, Simulation};
use crate::report::SimulationReport;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Token that denotes an epsilon transition in a definition.
pub const EPSILON_MARKER: &str = "e";

/// A transition as written in a definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: String,
    /// A single alphabet symbol, or [`EPSILON_MARKER`].
    pub symbol: String,
    pub to: String,
}

impl TransitionDefinition {
    pub fn new(from: impl Into<String>, symbol: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

/// Unvalidated description of an automaton and the string to test.
///
/// Missing JSON fields default to empty, so that validation can report
/// them by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonDefinition {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<TransitionDefinition>,
    pub start: String,
    pub finals: Vec<String>,
    pub input: String,
}

impl AutomatonDefinition {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate against `limits`, collapsing all failures into one error.
    pub fn into_problem(self, limits: &Limits) -> Result<Problem, LoadError> {
        match validate(&self, limits) {
            Validation::Success(problem) => Ok(problem),
            Validation::Failure(errors) => {
                Err(LoadError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }
}

/// A validated automaton together with the string to run it on.
#[derive(Clone, Debug)]
pub struct Problem {
    pub automaton: Automaton,
    pub input: String,
}

impl Problem {
    pub fn simulate(&self) -> Simulation {
        simulate(&self.automaton, &self.input)
    }

    /// Simulate and render the result with state names.
    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(&self.automaton, &self.simulate())
    }
}

/// Parse and validate a text definition.
pub fn load(text: &str, limits: &Limits) -> Result<Problem, LoadError> {
    parse(text)?.into_problem(limits)
}

/// Parse and validate a JSON definition.
pub fn load_json(json: &str, limits: &Limits) -> Result<Problem, LoadError> {
    AutomatonDefinition::from_json(json)?.into_problem(limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDS_WITH_AB: &str = r#"{
        "states": ["q0", "q1", "q2"],
        "alphabet": ["a", "b"],
        "transitions": [
            { "from": "q0", "symbol": "a", "to": "q0" },
            { "from": "q0", "symbol": "a", "to": "q1" },
            { "from": "q0", "symbol": "b", "to": "q0" },
            { "from": "q1", "symbol": "b", "to": "q2" }
        ],
        "start": "q0",
        "finals": ["q2"],
        "input": "aab"
    }"#;

    #[test]
    fn load_json_accepts_valid_definition() {
        let problem = load_json(ENDS_WITH_AB, &Limits::default()).unwrap();
        assert!(problem.simulate().accepted());
        assert_eq!(problem.report().accepted_by.as_deref(), Some("q2"));
    }

    #[test]
    fn missing_json_fields_become_validation_errors() {
        let err = load_json(r#"{ "states": ["q0"] }"#, &Limits::default()).unwrap_err();
        let fields: Vec<Field> = err.definition_errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&Field::Alphabet));
        assert!(fields.contains(&Field::Start));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = load_json("{ states: ", &Limits::default()).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
        assert!(err.definition_errors().is_empty());
    }

    #[test]
    fn load_reports_parse_errors() {
        let err = load("states q0", &Limits::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError { line: 1, .. })));
    }

    #[test]
    fn definition_roundtrips_through_json() {
        let definition = AutomatonDefinition::from_json(ENDS_WITH_AB).unwrap();
        let json = definition.to_json().unwrap();
        assert_eq!(AutomatonDefinition::from_json(&json).unwrap(), definition);
    }
}
