//! State handles and configurations.
//!
//! Every state name is mapped to a dense [`StateId`] once, when the
//! automaton is constructed. Configurations are sets of those handles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Handle of a state inside one [`Automaton`](super::Automaton).
///
/// Handles are assigned in declaration order, so ordering by handle is
/// ordering by the position the state was declared at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Deduplicated set of states that are simultaneously active.
///
/// Two sets are equal when they have the same members; iteration is in
/// ascending handle order, which keeps traces deterministic.
///
/// # Example
///
/// ```rust
/// use nfa_trace::core::StateSet;
/// # use nfa_trace::builder::AutomatonBuilder;
/// # let nfa = AutomatonBuilder::new().states(["q0", "q1"]).start("q0").build().unwrap();
/// let q0 = nfa.state_id("q0").unwrap();
/// let q1 = nfa.state_id("q1").unwrap();
///
/// let mut set = StateSet::singleton(q1);
/// assert!(set.insert(q0));
/// assert!(!set.insert(q1));
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![q0, q1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSet {
    states: BTreeSet<StateId>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(state: StateId) -> Self {
        Self {
            states: BTreeSet::from([state]),
        }
    }

    /// Insert a state, returning `true` if it was not already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate over members in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn union_with(&mut self, other: &StateSet) {
        self.states.extend(other.iter());
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.states.is_subset(&other.states)
    }

    pub fn intersects(&self, other: &StateSet) -> bool {
        self.first_common(other).is_some()
    }

    /// Lowest handle present in both sets.
    pub fn first_common(&self, other: &StateSet) -> Option<StateId> {
        self.states.intersection(&other.states).next().copied()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = StateId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, StateId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter().copied()
    }
}
