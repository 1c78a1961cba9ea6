//! Property-based tests for epsilon closure and simulation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata and inputs.

use nfa_trace::builder::AutomatonBuilder;
use nfa_trace::core::{epsilon_closure, simulate, Automaton, Label, StateSet, Verdict};
use proptest::prelude::*;

const MAX_STATES: usize = 6;

fn name(i: usize) -> String {
    format!("q{i}")
}

fn build(size: usize, transitions: &[(usize, u8, usize)], finals: &[usize]) -> Automaton {
    let mut builder = AutomatonBuilder::new()
        .states((0..size).map(name))
        .alphabet("ab")
        .start(name(0))
        .finals(finals.iter().map(|&i| name(i)));

    for &(from, label, to) in transitions {
        builder = match label {
            0 => builder.transition(name(from), 'a', name(to)),
            1 => builder.transition(name(from), 'b', name(to)),
            _ => builder.epsilon(name(from), name(to)),
        };
    }

    builder.build().unwrap()
}

prop_compose! {
    fn arbitrary_automaton(labels: u8)(size in 1..=MAX_STATES)(
        transitions in prop::collection::vec((0..size, 0..labels, 0..size), 0..16),
        finals in prop::collection::vec(0..size, 0..3),
        size in Just(size),
    ) -> Automaton {
        build(size, &transitions, &finals)
    }
}

prop_compose! {
    fn arbitrary_subset()(mask in prop::collection::vec(any::<bool>(), MAX_STATES)) -> Vec<bool> {
        mask
    }
}

fn subset(automaton: &Automaton, mask: &[bool]) -> StateSet {
    mask.iter()
        .enumerate()
        .filter(|(_, keep)| **keep)
        .filter_map(|(i, _)| automaton.state_id(&name(i)))
        .collect()
}

/// Straightforward rendition that scans every transition on each lookup.
fn reference_closure(automaton: &Automaton, states: &StateSet) -> StateSet {
    let edges: Vec<_> = automaton.transitions().collect();
    let mut closure = states.clone();
    loop {
        let before = closure.len();
        for &(from, label, to) in &edges {
            if label == Label::Epsilon && closure.contains(from) {
                closure.insert(to);
            }
        }
        if closure.len() == before {
            return closure;
        }
    }
}

fn reference_accepts(automaton: &Automaton, input: &str) -> bool {
    let edges: Vec<_> = automaton.transitions().collect();
    let mut current = reference_closure(automaton, &StateSet::singleton(automaton.start()));
    for symbol in input.chars() {
        let next: StateSet = edges
            .iter()
            .filter(|(from, label, _)| *label == Label::Symbol(symbol) && current.contains(*from))
            .map(|&(_, _, to)| to)
            .collect();
        current = reference_closure(automaton, &next);
    }
    current.intersects(automaton.finals())
}

proptest! {
    #[test]
    fn closure_is_idempotent(nfa in arbitrary_automaton(3), mask in arbitrary_subset()) {
        let once = epsilon_closure(&subset(&nfa, &mask), &nfa);
        let twice = epsilon_closure(&once, &nfa);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closure_contains_its_input(nfa in arbitrary_automaton(3), mask in arbitrary_subset()) {
        let states = subset(&nfa, &mask);
        let closure = epsilon_closure(&states, &nfa);
        prop_assert!(states.is_subset(&closure));
    }

    #[test]
    fn closure_without_epsilon_is_identity(nfa in arbitrary_automaton(2), mask in arbitrary_subset()) {
        prop_assert!(!nfa.has_epsilon_transitions());
        let states = subset(&nfa, &mask);
        prop_assert_eq!(epsilon_closure(&states, &nfa), states);
    }

    #[test]
    fn closure_distributes_over_union(
        nfa in arbitrary_automaton(3),
        left in arbitrary_subset(),
        right in arbitrary_subset(),
    ) {
        let a = subset(&nfa, &left);
        let b = subset(&nfa, &right);

        let mut union = a.clone();
        union.union_with(&b);

        let mut separately = epsilon_closure(&b, &nfa);
        separately.union_with(&epsilon_closure(&a, &nfa));

        prop_assert_eq!(epsilon_closure(&union, &nfa), separately);
    }

    #[test]
    fn closure_matches_linear_scan(nfa in arbitrary_automaton(3), mask in arbitrary_subset()) {
        let states = subset(&nfa, &mask);
        prop_assert_eq!(epsilon_closure(&states, &nfa), reference_closure(&nfa, &states));
    }

    #[test]
    fn simulation_is_deterministic(nfa in arbitrary_automaton(3), input in "[ab]{0,8}") {
        let first = simulate(&nfa, &input);
        let second = simulate(&nfa, &input);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn verdict_matches_linear_scan(nfa in arbitrary_automaton(3), input in "[ab]{0,8}") {
        prop_assert_eq!(simulate(&nfa, &input).accepted(), reference_accepts(&nfa, &input));
    }

    #[test]
    fn trace_shape_follows_input(nfa in arbitrary_automaton(3), input in "[ab]{0,8}") {
        let result = simulate(&nfa, &input);
        let consumed: String = result.trace.symbols().collect();

        match result.dead_end() {
            Some(dead_end) => {
                prop_assert_eq!(result.trace.len(), dead_end.step + 1);
                prop_assert!(input.starts_with(&consumed));
                prop_assert_eq!(consumed.chars().last(), Some(dead_end.symbol));
                prop_assert!(result.trace.last().unwrap().configuration.is_empty());
            }
            None => {
                prop_assert_eq!(result.trace.len(), input.chars().count() + 1);
                prop_assert_eq!(consumed, input);
            }
        }
    }

    #[test]
    fn recorded_configurations_are_closed(nfa in arbitrary_automaton(3), input in "[ab]{0,8}") {
        let result = simulate(&nfa, &input);
        for configuration in result.trace.configurations() {
            prop_assert_eq!(&epsilon_closure(configuration, &nfa), configuration);
        }
    }

    #[test]
    fn acceptance_means_final_state_is_active(nfa in arbitrary_automaton(3), input in "[ab]{0,8}") {
        let result = simulate(&nfa, &input);
        let last = &result.trace.last().unwrap().configuration;
        match result.verdict {
            Verdict::Accepted { via } => {
                prop_assert!(last.contains(via));
                prop_assert!(nfa.is_final(via));
            }
            Verdict::Rejected { configuration, .. } => {
                prop_assert_eq!(&configuration, last);
                prop_assert!(!configuration.intersects(nfa.finals()));
            }
        }
    }

    #[test]
    fn no_final_states_never_accepts(
        size in 1..=MAX_STATES,
        transitions in prop::collection::vec((0..MAX_STATES, 0..3u8, 0..MAX_STATES), 0..16),
        input in "[ab]{0,8}",
    ) {
        let transitions: Vec<_> = transitions
            .into_iter()
            .map(|(from, label, to)| (from % size, label, to % size))
            .collect();
        let nfa = build(size, &transitions, &[]);
        prop_assert!(!simulate(&nfa, &input).accepted());
    }
}
