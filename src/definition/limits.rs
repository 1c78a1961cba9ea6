//! Size ceilings applied while validating a definition.

use serde::{Deserialize, Serialize};

/// Upper bounds on the size of an accepted definition.
///
/// Defaults match the interactive prompt's historical ceilings. Missing
/// fields deserialize to their defaults.
///
/// ```rust
/// use nfa_trace::definition::Limits;
///
/// let limits: Limits = serde_json::from_str(r#"{ "max_states": 8 }"#).unwrap();
/// assert_eq!(limits.max_states, 8);
/// assert_eq!(limits.max_transitions, Limits::default().max_transitions);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_states: usize,
    pub max_state_name: usize,
    pub max_alphabet: usize,
    pub max_transitions: usize,
    pub max_input: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_states: 50,
            max_state_name: 20,
            max_alphabet: 20,
            max_transitions: 100,
            max_input: 99,
        }
    }
}

impl Limits {
    /// Limits that only reject structurally invalid definitions.
    pub fn unbounded() -> Self {
        Self {
            max_states: usize::MAX,
            max_state_name: usize::MAX,
            max_alphabet: usize::MAX,
            max_transitions: usize::MAX,
            max_input: usize::MAX,
        }
    }

    pub fn max_states(mut self, n: usize) -> Self {
        self.max_states = n;
        self
    }

    pub fn max_state_name(mut self, n: usize) -> Self {
        self.max_state_name = n;
        self
    }

    pub fn max_alphabet(mut self, n: usize) -> Self {
        self.max_alphabet = n;
        self
    }

    pub fn max_transitions(mut self, n: usize) -> Self {
        self.max_transitions = n;
        self
    }

    pub fn max_input(mut self, n: usize) -> Self {
        self.max_input = n;
        self
    }
}
