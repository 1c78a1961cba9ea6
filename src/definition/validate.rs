//! Validation of definitions using `Validation`.
//!
//! Every field is checked and ALL failures are reported together, so a
//! caller can point at each bad field in a single pass instead of
//! fixing them one at a time.

use super::error::{DefinitionError, Field};
use super::limits::Limits;
use super::{AutomatonDefinition, Problem, EPSILON_MARKER};
use crate::core::{Automaton, Label, Transition};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionError>>;

fn check(ok: bool, field: Field, reason: impl FnOnce() -> String) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(DefinitionError::new(field, reason()))
    }
}

/// Validate a definition and, if it is sound, build the [`Problem`].
pub fn validate(
    definition: &AutomatonDefinition,
    limits: &Limits,
) -> Validation<Problem, NonEmptyVec<DefinitionError>> {
    let mut checks: Vec<Check> = Vec::new();

    checks.extend(check_states(definition, limits));
    let alphabet = symbols(definition);
    checks.extend(check_alphabet(definition, limits));
    checks.extend(check_transitions(definition, limits, &alphabet));
    checks.extend(check_start_and_finals(definition));
    checks.extend(check_input(definition, limits, &alphabet));

    match Validation::all_vec(checks) {
        Validation::Success(_) => match build(definition, &alphabet) {
            Ok(problem) => Validation::success(problem),
            Err(err) => Validation::fail(err),
        },
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

fn check_states(definition: &AutomatonDefinition, limits: &Limits) -> Vec<Check> {
    let count = definition.states.len();
    let mut checks = vec![check(
        (1..=limits.max_states).contains(&count),
        Field::States,
        || format!("expected 1 to {} states, got {count}", limits.max_states),
    )];

    let mut seen = HashSet::new();
    for (i, name) in definition.states.iter().enumerate() {
        let length = name.chars().count();
        checks.push(check(
            (1..=limits.max_state_name).contains(&length),
            Field::State(i),
            || {
                format!(
                    "name must be 1 to {} characters, got {length}",
                    limits.max_state_name
                )
            },
        ));
        checks.push(check(
            !name.chars().any(char::is_whitespace),
            Field::State(i),
            || format!("name '{name}' contains whitespace"),
        ));
        checks.push(check(seen.insert(name.as_str()), Field::State(i), || {
            format!("'{name}' is declared more than once")
        }));
    }

    checks
}

fn check_alphabet(definition: &AutomatonDefinition, limits: &Limits) -> Vec<Check> {
    let count = definition.alphabet.len();
    let mut checks = vec![check(
        (1..=limits.max_alphabet).contains(&count),
        Field::Alphabet,
        || format!("expected 1 to {} symbols, got {count}", limits.max_alphabet),
    )];

    let mut seen = HashSet::new();
    for (i, symbol) in definition.alphabet.iter().enumerate() {
        let mut chars = symbol.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        let check_symbol = match single {
            None => check(false, Field::Symbol(i), || {
                format!("'{symbol}' must be a single character")
            }),
            Some(_) if symbol == EPSILON_MARKER => check(false, Field::Symbol(i), || {
                format!("'{EPSILON_MARKER}' is reserved for epsilon")
            }),
            Some(c) if c.is_whitespace() => check(false, Field::Symbol(i), || {
                "symbol must not be whitespace".to_string()
            }),
            Some(c) => check(seen.insert(c), Field::Symbol(i), || {
                format!("'{c}' appears more than once")
            }),
        };
        checks.push(check_symbol);
    }

    checks
}

fn check_transitions(
    definition: &AutomatonDefinition,
    limits: &Limits,
    alphabet: &HashSet<char>,
) -> Vec<Check> {
    let count = definition.transitions.len();
    let mut checks = vec![check(
        count <= limits.max_transitions,
        Field::Transitions,
        || format!("expected at most {} transitions, got {count}", limits.max_transitions),
    )];

    for (i, transition) in definition.transitions.iter().enumerate() {
        for endpoint in [&transition.from, &transition.to] {
            checks.push(check(
                definition.states.contains(endpoint),
                Field::Transition(i),
                || format!("unknown state '{endpoint}'"),
            ));
        }
        checks.push(check(
            label(&transition.symbol, alphabet).is_some(),
            Field::Transition(i),
            || {
                format!(
                    "symbol '{}' is neither '{EPSILON_MARKER}' nor in the alphabet",
                    transition.symbol
                )
            },
        ));
    }

    checks
}

fn check_start_and_finals(definition: &AutomatonDefinition) -> Vec<Check> {
    let start = &definition.start;
    let mut checks = vec![check(
        definition.states.contains(start),
        Field::Start,
        || format!("unknown state '{start}'"),
    )];

    let count = definition.finals.len();
    checks.push(check(
        count <= definition.states.len(),
        Field::Finals,
        || {
            format!(
                "expected at most {} final states, got {count}",
                definition.states.len()
            )
        },
    ));

    for (i, name) in definition.finals.iter().enumerate() {
        checks.push(check(
            definition.states.contains(name),
            Field::Final(i),
            || format!("unknown state '{name}'"),
        ));
    }

    checks
}

fn check_input(
    definition: &AutomatonDefinition,
    limits: &Limits,
    alphabet: &HashSet<char>,
) -> Vec<Check> {
    let input = &definition.input;
    let length = input.chars().count();
    let mut checks = vec![check(length <= limits.max_input, Field::Input, || {
        format!("expected at most {} symbols, got {length}", limits.max_input)
    })];

    if let Some((position, symbol)) = input.chars().enumerate().find(|(_, c)| !alphabet.contains(c)) {
        checks.push(check(false, Field::Input, || {
            format!("symbol '{symbol}' at position {} is not in the alphabet", position + 1)
        }));
    }

    checks
}

/// Alphabet symbols that are usable single characters.
fn symbols(definition: &AutomatonDefinition) -> HashSet<char> {
    definition
        .alphabet
        .iter()
        .filter(|s| s.as_str() != EPSILON_MARKER)
        .filter_map(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => Some(c),
                _ => None,
            }
        })
        .collect()
}

fn label(symbol: &str, alphabet: &HashSet<char>) -> Option<Label> {
    if symbol == EPSILON_MARKER {
        return Some(Label::Epsilon);
    }
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if alphabet.contains(&c) => Some(Label::Symbol(c)),
        _ => None,
    }
}

fn build(
    definition: &AutomatonDefinition,
    alphabet: &HashSet<char>,
) -> Result<Problem, DefinitionError> {
    let mut transitions = Vec::with_capacity(definition.transitions.len());
    for (i, t) in definition.transitions.iter().enumerate() {
        let label = label(&t.symbol, alphabet).ok_or_else(|| {
            DefinitionError::new(Field::Transition(i), format!("bad symbol '{}'", t.symbol))
        })?;
        transitions.push(Transition::new(t.from.as_str(), label, t.to.as_str()));
    }

    let automaton = Automaton::new(
        definition.states.iter().map(String::as_str),
        definition
            .alphabet
            .iter()
            .filter_map(|s| s.chars().next()),
        transitions,
        &definition.start,
        &definition.finals,
    )?;

    Ok(Problem {
        automaton,
        input: definition.input.clone(),
    })
}
