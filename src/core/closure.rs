//! Epsilon closure of a configuration.

use super::automaton::{Automaton, Label};
use super::state::StateSet;

/// Smallest superset of `states` that is closed under epsilon transitions.
///
/// Worklist traversal: a state is pushed only when it is first inserted
/// into the result, so each state is expanded at most once. The result
/// depends only on the membership of `states`.
///
/// # Example
///
/// ```rust
/// use nfa_trace::builder::AutomatonBuilder;
/// use nfa_trace::core::{epsilon_closure, StateSet};
///
/// let nfa = AutomatonBuilder::new()
///     .states(["q0", "q1", "q2"])
///     .alphabet("a")
///     .epsilon("q0", "q1")
///     .epsilon("q1", "q2")
///     .start("q0")
///     .build()
///     .unwrap();
///
/// let closure = epsilon_closure(&StateSet::singleton(nfa.start()), &nfa);
/// assert_eq!(nfa.state_names(&closure).collect::<Vec<_>>(), vec!["q0", "q1", "q2"]);
/// ```
pub fn epsilon_closure(states: &StateSet, automaton: &Automaton) -> StateSet {
    let mut closure = states.clone();
    let mut worklist: Vec<_> = states.iter().collect();

    while let Some(state) = worklist.pop() {
        for target in automaton.targets(state, Label::Epsilon) {
            if closure.insert(target) {
                worklist.push(target);
            }
        }
    }

    closure
}
