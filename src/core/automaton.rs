//! Immutable epsilon-NFA data model.

use super::state::{StateId, StateSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use thiserror::Error;

/// Label of a transition: an alphabet symbol or epsilon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Epsilon => write!(f, "ε"),
        }
    }
}

/// A named transition, as supplied before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub label: Label,
    pub to: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, label: Label, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            label,
            to: to.into(),
        }
    }
}

/// Reasons an automaton description is rejected at construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Transition {from} -{label}-> {to} references unknown state '{unknown}'")]
    InvalidReference {
        from: String,
        label: Label,
        to: String,
        unknown: String,
    },

    #[error("Transition {from} -{symbol}-> {to} uses symbol '{symbol}' outside the alphabet")]
    InvalidSymbol {
        from: String,
        symbol: char,
        to: String,
    },

    #[error("Start state '{state}' is not a declared state")]
    InvalidStart { state: String },

    #[error("Final state '{state}' is not a declared state")]
    InvalidFinal { state: String },
}

/// A validated epsilon-NFA.
///
/// Construction checks every reference once and builds a name-to-handle
/// map plus a `(state, label)` transition table; afterwards the automaton
/// cannot be changed and every lookup is a hash probe.
///
/// # Example
///
/// ```rust
/// use nfa_trace::core::{Automaton, Label, Transition};
///
/// let nfa = Automaton::new(
///     ["q0", "q1"],
///     ['a'],
///     [
///         Transition::new("q0", Label::Symbol('a'), "q1"),
///         Transition::new("q1", Label::Epsilon, "q0"),
///     ],
///     "q0",
///     ["q1"],
/// )
/// .unwrap();
///
/// let q0 = nfa.state_id("q0").unwrap();
/// let q1 = nfa.state_id("q1").unwrap();
/// assert!(nfa.targets(q0, Label::Symbol('a')).contains(q1));
/// assert!(nfa.targets(q0, Label::Epsilon).is_empty());
/// assert!(nfa.is_final(q1));
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    names: Vec<String>,
    index: HashMap<String, StateId>,
    alphabet: BTreeSet<char>,
    table: HashMap<(StateId, Label), StateSet>,
    start: StateId,
    finals: StateSet,
    empty: StateSet,
}

impl Automaton {
    /// Validate a description and build the automaton.
    ///
    /// Checks run in this order and stop at the first violation: unique
    /// state names, transition endpoints, transition labels, the start
    /// state, then each final state.
    pub fn new<S, A, T, F>(
        states: S,
        alphabet: A,
        transitions: T,
        start: &str,
        finals: F,
    ) -> Result<Self, AutomatonError>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator<Item = char>,
        T: IntoIterator<Item = Transition>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut index = HashMap::new();
        for name in states {
            let name: String = name.into();
            let id = StateId(names.len());
            if index.insert(name.clone(), id).is_some() {
                return Err(AutomatonError::DuplicateState { state: name });
            }
            names.push(name);
        }

        let alphabet: BTreeSet<char> = alphabet.into_iter().collect();

        let mut table: HashMap<(StateId, Label), StateSet> = HashMap::new();
        for transition in transitions {
            let resolve = |name: &str| {
                index
                    .get(name)
                    .copied()
                    .ok_or_else(|| AutomatonError::InvalidReference {
                        from: transition.from.clone(),
                        label: transition.label,
                        to: transition.to.clone(),
                        unknown: name.to_string(),
                    })
            };
            let from = resolve(transition.from.as_str())?;
            let to = resolve(transition.to.as_str())?;

            if let Label::Symbol(symbol) = transition.label {
                if !alphabet.contains(&symbol) {
                    return Err(AutomatonError::InvalidSymbol {
                        from: transition.from,
                        symbol,
                        to: transition.to,
                    });
                }
            }

            table.entry((from, transition.label)).or_default().insert(to);
        }

        let start = index
            .get(start)
            .copied()
            .ok_or_else(|| AutomatonError::InvalidStart {
                state: start.to_string(),
            })?;

        let mut final_set = StateSet::new();
        for name in finals {
            let name = name.as_ref();
            let id = index
                .get(name)
                .copied()
                .ok_or_else(|| AutomatonError::InvalidFinal {
                    state: name.to_string(),
                })?;
            final_set.insert(id);
        }

        Ok(Self {
            names,
            index,
            alphabet,
            table,
            start,
            finals: final_set,
            empty: StateSet::new(),
        })
    }

    /// Resolve a state name to its handle.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.index.get(name).copied()
    }

    /// Name of a state. Handles from another automaton may be out of range.
    pub fn state_name(&self, id: StateId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    /// Names of the members of `set`, in handle order.
    pub fn state_names<'a>(&'a self, set: &'a StateSet) -> impl Iterator<Item = &'a str> + 'a {
        set.iter().filter_map(move |id| self.state_name(id))
    }

    /// All declared state names, in declaration order.
    pub fn states(&self) -> &[String] {
        &self.names
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn finals(&self) -> &StateSet {
        &self.finals
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.finals.contains(id)
    }

    /// Destinations of `state` on `label`; empty when nothing matches.
    pub fn targets(&self, state: StateId, label: Label) -> &StateSet {
        self.table.get(&(state, label)).unwrap_or(&self.empty)
    }

    pub fn has_epsilon_transitions(&self) -> bool {
        self.table.keys().any(|(_, label)| *label == Label::Epsilon)
    }

    /// Deduplicated transitions as handle triples, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.table
            .iter()
            .flat_map(|(&(from, label), targets)| targets.iter().map(move |to| (from, label, to)))
    }
}
